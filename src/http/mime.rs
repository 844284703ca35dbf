//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension. The table
//! leans toward web asset bundles: markup, scripts, textures, 3D models.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use lanserve::http::mime::content_type;
/// assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(content_type(Some("glb")), "model/gltf-binary");
/// assert_eq!(content_type(None), "application/octet-stream");
/// ```
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images and textures
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("ktx2") => "image/ktx2",
        Some("hdr") => "image/vnd.radiance",

        // 3D models
        Some("gltf") => "model/gltf+json",
        Some("glb") => "model/gltf-binary",
        Some("obj") => "model/obj",
        Some("mtl") => "model/mtl",
        Some("stl") => "model/stl",

        // Media
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Default, also covers gltf .bin buffers
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Some("css")), "text/css");
        assert_eq!(content_type(Some("js")), "application/javascript");
        assert_eq!(content_type(Some("json")), "application/json");
        assert_eq!(content_type(Some("png")), "image/png");
    }

    #[test]
    fn test_model_types() {
        assert_eq!(content_type(Some("gltf")), "model/gltf+json");
        assert_eq!(content_type(Some("glb")), "model/gltf-binary");
        assert_eq!(content_type(Some("obj")), "model/obj");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type(Some("bin")), "application/octet-stream");
        assert_eq!(content_type(None), "application/octet-stream");
    }
}
