//! Response decoration module
//!
//! Every response leaves the server through `decorate`, which appends the
//! cross-origin and cache-disabling header set. File responses, directory
//! listings, error responses, and preflight replies all take the same path.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

/// Header set appended to every response, in emission order
const DECORATION: [(&str, &str); 6] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "X-Requested-With, Content-Type"),
    ("cache-control", "no-store, no-cache, must-revalidate, max-age=0"),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

/// Append the CORS and no-cache headers to a finished response
pub fn decorate(mut response: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    for (name, value) in DECORATION {
        headers.append(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
