//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `robodesk.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Dashboard bundle settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sample data settings.
    pub sample: SampleConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Where the compiled Leptos dashboard lives.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding `index.html` and the WASM bundle; API only when unset.
    pub dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Sample data toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Seed robots, tasks and inspections on startup.
    pub seed_enabled: bool,
}

impl Config {
    /// Load configuration from `robodesk.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if a port
    /// override is not a valid port, or if the resulting configuration is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("robodesk.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ROBODESK_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("ROBODESK_PORT") {
            self.server.port = parse_port("ROBODESK_PORT", &val)?;
        }
        if let Ok(val) = std::env::var("ROBODESK_BIND") {
            let (host, port) = parse_bind(&val)?;
            self.server.host = host;
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("ROBODESK_DASHBOARD_DIR") {
            self.dashboard.dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("ROBODESK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if let Some(dir) = &self.dashboard.dir {
            if !dir.is_dir() {
                return Err(ConfigError::Validation(format!(
                    "dashboard directory {} does not exist",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_port(var: &str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{var} is not a valid port: {raw:?}")))
}

/// Split a `host:port` override.
fn parse_bind(raw: &str) -> Result<(String, u16), ConfigError> {
    let (host, port) = raw.rsplit_once(':').ok_or_else(|| {
        ConfigError::Validation(format!("ROBODESK_BIND must be host:port, got {raw:?}"))
    })?;
    Ok((host.to_string(), parse_port("ROBODESK_BIND", port)?))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "robodeskd=info,robodesk=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { seed_enabled: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
