//! Permissive cross-origin headers.
//!
//! Applied outside routing so every response carries them, including 404s
//! and error responses.

use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::HeaderValue;
use tower_http::set_header::SetResponseHeaderLayer;

/// Request headers browsers may send.
pub const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept, Code";

/// `Access-Control-Allow-Origin: *`
pub fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))
}

/// `Access-Control-Allow-Headers` with the fixed allow-list.
pub fn allow_headers() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}
