use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppSection, LogFormat};

/// Initialize structured logging.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// everything, with this crate one notch louder in debug mode.
pub fn init(app: &AppSection) {
    let default_directive = if app.debug {
        format!("{},docmind=debug", app.log_level)
    } else {
        app.log_level.clone()
    };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let (text_layer, json_layer) = match app.log_format {
        LogFormat::Text => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(text_layer)
        .with(json_layer)
        .init();
}
