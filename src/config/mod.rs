// Configuration module entry point
// Layered configuration: built-in defaults, then LANSERVE_-prefixed
// environment variables, then the optional port argument from the command line.

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from defaults and environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("LANSERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.root", ".")?
            .set_default("server.reuse_address", true)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "dev")?
            .set_default("http.probe_addr", "8.8.8.8:80")?
            .build()?;

        settings.try_deserialize()
    }

    /// Apply the optional port argument from the command line.
    ///
    /// A missing argument keeps the configured port; a non-integer argument
    /// is a fatal startup error surfaced as the parse error itself.
    pub fn apply_port_arg(&mut self, arg: Option<&str>) -> Result<(), std::num::ParseIntError> {
        if let Some(raw) = arg {
            self.server.port = raw.parse()?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
