// Configuration module entry point
// Loads layered configuration and holds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::{Result, ServerError};

// Re-export public types
pub use state::AppState;
pub use types::{Config, LogFormat};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix for environment overrides, e.g. `HELLO_CLOCK_SERVER__PORT=9000`
const ENV_PREFIX: &str = "HELLO_CLOCK";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the optional file,
    /// then `HELLO_CLOCK_*` environment variables.
    pub fn load_from(config_path: &str) -> std::result::Result<Self, config::ConfigError> {
        Self::load_with(config_path, None)
    }

    /// Same as [`Config::load_from`], reading environment overrides from
    /// `env` instead of the process environment when it is `Some`
    pub fn load_with(
        config_path: &str,
        env: Option<config::Map<String, String>>,
    ) -> std::result::Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.debug", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default(
                "http.server_name",
                concat!("hello-clock/", env!("CARGO_PKG_VERSION")),
            )?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| ServerError::invalid_address(format!("{addr} ({e})")))
    }

    /// Log level after applying debug mode
    pub fn effective_log_level(&self) -> &str {
        if self.server.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }

    /// Whether per-request header counts are logged
    pub const fn show_headers(&self) -> bool {
        self.server.debug || self.logging.show_headers
    }
}
