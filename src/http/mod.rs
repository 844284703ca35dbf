//! HTTP protocol layer module
//!
//! Response building, header decoration, and MIME detection, decoupled from
//! request dispatch.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_file_response, build_listing_response,
    build_preflight_response, build_redirect_response,
};
