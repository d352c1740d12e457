use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application configuration.
/// Loaded from environment variables; every field has a default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Where the downloadable artifacts live
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP port (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset (default: info)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory the artifact file names are resolved against (default: .)
    #[serde(default = "default_artifacts_root")]
    pub root: PathBuf,
}

impl AppConfig {
    /// Load config from `KLOOW__*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let cfg = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KLOOW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(cfg)
    }

    /// Deserialize from an already-built `config::Config`.
    pub fn from_config(cfg: config::Config) -> Result<Self, config::ConfigError> {
        cfg.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            root: default_artifacts_root(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_artifacts_root() -> PathBuf {
    PathBuf::from(".")
}
