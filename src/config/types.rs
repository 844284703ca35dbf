// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Document root; relative paths resolve against the working directory
    pub root: String,
    /// Enable `SO_REUSEADDR` on the listening socket so rapid restarts on
    /// the same port do not fail while the old socket sits in `TIME_WAIT`
    pub reuse_address: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format: "dev", "common", or "combined"
    pub access_log_format: String,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Destination for the outbound route probe used to discover the LAN
    /// address. No packets are ever sent to it.
    pub probe_addr: String,
}
