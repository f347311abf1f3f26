//! DocMind server
//!
//! Entry point for the research workspace.

use std::sync::Arc;

use mimalloc::MiMalloc;

use docmind::config::AppConfig;
use docmind::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    telemetry::init(&config.app);

    server::start_server(Arc::new(config)).await
}
