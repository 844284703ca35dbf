//! Access log format module
//!
//! Supports multiple log formats:
//! - `dev` (short development format, the default)
//! - `common` (Common Log Format - CLF)
//! - `combined` (Apache/Nginx combined format)

use chrono::Local;

/// Access log entry containing request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, HEAD, OPTIONS, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version (1.0, 1.1)
    pub http_version: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
    /// Referer header
    pub referer: Option<String>,
    /// User-Agent header
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
        }
    }

    /// Format the log entry according to the specified format.
    ///
    /// Unknown format names fall back to `dev`.
    pub fn format(&self, format: &str) -> String {
        match format {
            "common" => self.format_common(),
            "combined" => self.format_combined(),
            _ => self.format_dev(),
        }
    }

    /// Short development format
    /// `GET /scene.gltf -> 200 (1234 bytes)`
    fn format_dev(&self) -> String {
        format!(
            "{} {} -> {} ({} bytes)",
            self.method, self.path, self.status, self.body_bytes
        )
    }

    /// Common Log Format (CLF)
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.7".to_string(),
            "GET".to_string(),
            "/models/scene.gltf".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 1234;
        entry.referer = Some("http://localhost:8000/".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry
    }

    #[test]
    fn test_format_dev() {
        let entry = create_test_entry();
        assert_eq!(
            entry.format("dev"),
            "GET /models/scene.gltf -> 200 (1234 bytes)"
        );
    }

    #[test]
    fn test_unknown_format_falls_back_to_dev() {
        let entry = create_test_entry();
        assert_eq!(entry.format("fancy"), entry.format("dev"));
    }

    #[test]
    fn test_format_common() {
        let entry = create_test_entry();
        let log = entry.format("common");
        assert!(log.contains("192.168.1.7"));
        assert!(log.contains("GET /models/scene.gltf HTTP/1.1"));
        assert!(log.contains("200 1234"));
        // Common format does not include referer/user-agent
        assert!(!log.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_combined() {
        let entry = create_test_entry();
        let log = entry.format("combined");
        assert!(log.contains("GET /models/scene.gltf HTTP/1.1"));
        assert!(log.contains("\"http://localhost:8000/\""));
        assert!(log.contains("\"Mozilla/5.0\""));
    }
}
