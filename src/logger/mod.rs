//! Logger module
//!
//! Console logging for the server: the startup banner, tagged error and
//! warning lines, and per-request access log entries.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::net::http_url;
use std::net::{IpAddr, SocketAddr};

/// Print the startup banner with the addresses peers can use
pub fn log_server_start(addr: &SocketAddr, lan_ip: IpAddr, config: &Config) {
    let port = addr.port();
    println!("======================================");
    println!("Serving '{}' with caching disabled", config.server.root);
    println!("Local address:   http://localhost:{port}");
    println!("Network address: {}", http_url(lan_ip, port));
    println!(
        "Deep links work too, e.g. {}/models/scene.gltf",
        http_url(lan_ip, port)
    );
    println!();
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

/// Print the shutdown notice after the accept loop stops
pub fn log_shutdown() {
    println!("\nServer stopped.");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
