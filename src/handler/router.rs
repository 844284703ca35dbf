//! Request dispatch module
//!
//! Entry point for HTTP request processing: method gate, static file
//! delegation, and the single decoration point every response passes
//! through on its way out.

use crate::config::Config;
use crate::handler::static_files;
use crate::http::{self, headers};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Preflight requests short-circuit before any file system access; GET and
/// HEAD delegate to static file serving; everything else is refused. The
/// resulting response is decorated with the cross-origin and no-cache
/// header set, whatever its status.
pub async fn handle_request<B>(
    req: Request<B>,
    config: Arc<Config>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let is_head = method == Method::HEAD;

    let response = match method {
        Method::OPTIONS => http::build_preflight_response(),
        Method::GET | Method::HEAD => {
            static_files::serve(&config.server.root, &path, is_head).await
        }
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    let response = headers::decorate(response);

    if config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.http_version = version_label(req.version()).to_owned();
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(&entry, &config.logging.access_log_format);
    }

    Ok(response)
}

/// Version label for access log lines
fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}

/// Extract a request header as an owned string
fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HttpConfig, LoggingConfig, ServerConfig};
    use http_body_util::BodyExt;
    use std::fs::File;
    use std::io::Write;
    use std::net::{IpAddr, Ipv4Addr};
    use tempfile::TempDir;

    fn test_config(root: &str) -> Arc<Config> {
        Arc::new(Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                root: root.to_string(),
                reuse_address: true,
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_format: "dev".to_string(),
            },
            http: HttpConfig {
                probe_addr: "8.8.8.8:80".to_string(),
            },
        })
    }

    fn peer() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 7)), 52_431)
    }

    fn request(method: Method, path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    fn assert_decorated(response: &Response<Full<Bytes>>) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(
            headers["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers["access-control-allow-headers"],
            "X-Requested-With, Content-Type"
        );
        assert_eq!(
            headers["cache-control"],
            "no-store, no-cache, must-revalidate, max-age=0"
        );
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
    }

    #[tokio::test]
    async fn test_preflight_is_empty_200_with_headers() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path().to_str().unwrap());

        let response = handle_request(request(Method::OPTIONS, "/anything"), config, peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_decorated(&response);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_existing_file() {
        let dir = TempDir::new().unwrap();
        let mut file = File::create(dir.path().join("scene.glb")).unwrap();
        file.write_all(b"glTF binary").unwrap();
        let config = test_config(dir.path().to_str().unwrap());

        let response = handle_request(request(Method::GET, "/scene.glb"), config, peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-type"], "model/gltf-binary");
        assert_decorated(&response);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"glTF binary");
    }

    #[tokio::test]
    async fn test_get_missing_file_is_decorated_404() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path().to_str().unwrap());

        let response = handle_request(request(Method::GET, "/missing-file"), config, peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert_decorated(&response);
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let dir = TempDir::new().unwrap();
        let mut file = File::create(dir.path().join("notes.txt")).unwrap();
        file.write_all(b"hello").unwrap();
        let config = test_config(dir.path().to_str().unwrap());

        let response = handle_request(request(Method::HEAD, "/notes.txt"), config, peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["content-length"], "5");
        assert_decorated(&response);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_post_is_decorated_405() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path().to_str().unwrap());

        let response = handle_request(request(Method::POST, "/upload"), config, peer())
            .await
            .unwrap();

        assert_eq!(response.status(), 405);
        assert_decorated(&response);
    }
}
