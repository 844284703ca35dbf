//! Static file serving module
//!
//! Resolves request paths against the document root and serves file bytes,
//! index files, or a generated directory listing.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Index files tried before falling back to a generated listing
const INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Serve a request path from the document root
pub async fn serve(root: &str, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let Some(resolved) = resolve_path(root, request_path) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        // Relative links in listings only resolve under a trailing slash
        if !request_path.ends_with('/') {
            return http::build_redirect_response(&format!("{request_path}/"));
        }

        for index in INDEX_FILES {
            let candidate = resolved.join(index);
            if candidate.is_file() {
                return serve_file(&candidate, is_head).await;
            }
        }

        return serve_listing(&resolved, request_path, is_head).await;
    }

    serve_file(&resolved, is_head).await
}

/// Resolve a request path inside the document root.
///
/// Returns None when the document root is inaccessible, the target does not
/// exist, or the target escapes the root.
fn resolve_path(root: &str, request_path: &str) -> Option<PathBuf> {
    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{root}': {e}"
            ));
            return None;
        }
    };

    let relative = request_path.trim_start_matches('/');
    let target = root_canonical.join(relative);

    // Missing files are the common 404 case, not worth a log line
    let target_canonical = target.canonicalize().ok()?;
    if !target_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            target_canonical.display()
        ));
        return None;
    }

    Some(target_canonical)
}

/// Read a file and build its response
async fn serve_file(path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => {
            let content_type = mime::content_type(path.extension().and_then(|e| e.to_str()));
            http::build_file_response(content, content_type, is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            http::build_404_response()
        }
    }
}

/// Generate and serve an HTML listing for a directory
async fn serve_listing(dir: &Path, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match list_entries(dir).await {
        Ok(entries) => {
            http::build_listing_response(render_listing(request_path, &entries), is_head)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response()
        }
    }
}

/// Collect entry names, directories suffixed with a slash, sorted by name
async fn list_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir).await?;

    while let Some(entry) = reader.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await.is_ok_and(|t| t.is_dir()) {
            name.push('/');
        }
        entries.push(name);
    }

    entries.sort();
    Ok(entries)
}

/// Render the listing page for a directory
fn render_listing(request_path: &str, entries: &[String]) -> String {
    let title = escape_html(request_path);
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Directory listing for {title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>Directory listing for {title}</h1>\n"));
    html.push_str("<hr>\n<ul>\n");

    for entry in entries {
        let name = escape_html(entry);
        html.push_str(&format!("<li><a href=\"{name}\">{name}</a></li>\n"));
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Minimal HTML escaping for listing entries
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
