//! Layered application configuration.
//!
//! Priority, highest first: CLI flag (or its env fallback), `DOCMIND_*`
//! environment variables, the YAML config file, built-in defaults.

use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Workspace seed file (YAML); the built-in sample is used when absent
    #[arg(long, env = "WORKSPACE_SEED")]
    pub seed_file: Option<String>,

    /// Log output format: text or json
    #[arg(long, env = "LOG_FORMAT")]
    pub log_format: Option<String>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub app: AppSection,
    pub cors: CorsConfig,
    pub resilience: ResilienceConfig,
    pub workspace: WorkspaceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
    pub debug: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub frontend_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
    pub timeout_secs: u64,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub seed_file: Option<String>,
    pub static_dir: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        // 1. Defaults
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("app.name", "DocMind")?
            .set_default("app.debug", false)?
            .set_default("app.log_level", "info")?
            .set_default("app.log_format", "text")?
            .set_default("cors.frontend_origin", "http://localhost:3000")?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("resilience.timeout_secs", 30)?
            .set_default("resilience.body_limit_bytes", 1024 * 1024)?
            .set_default("workspace.static_dir", "static")?;

        // 2. Config file: explicit path must exist, ./config.yaml is optional
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(true));
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            builder = builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml));
        }

        // 3. Environment variables, e.g. DOCMIND_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("DOCMIND")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI flags (clap already folded in their env fallbacks)
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(seed) = cli.seed_file {
            builder = builder.set_override("workspace.seed_file", seed)?;
        }
        if let Some(format) = cli.log_format {
            builder = builder.set_override("app.log_format", format)?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if !self.resilience.timeout_disabled && self.resilience.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "resilience.timeout_secs must be positive; set resilience.timeout_disabled to turn the timeout off".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let config = AppConfig::load_from_args([
            "docmind",
            "--port",
            "4321",
            "--host",
            "0.0.0.0",
            "--seed-file",
            "seed.yaml",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:4321");
        assert_eq!(config.workspace.seed_file.as_deref(), Some("seed.yaml"));
        assert_eq!(config.app.log_format, LogFormat::Json);
    }

    #[test]
    fn test_zero_timeout_is_config_error() {
        let mut app_config = AppConfig::load_from_args(["docmind"]).unwrap();
        app_config.resilience.timeout_secs = 0;
        assert!(matches!(
            app_config.validate(),
            Err(config::ConfigError::Message(msg)) if msg.contains("timeout_secs")
        ));

        app_config.resilience.timeout_disabled = true;
        assert!(app_config.validate().is_ok());
    }

    #[test]
    fn test_unknown_flag_is_config_error() {
        let err = AppConfig::load_from_args(["docmind", "--no-such-flag"]).unwrap_err();
        assert!(matches!(err, config::ConfigError::Message(_)));
    }
}
