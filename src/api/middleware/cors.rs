//! Cross-origin policy for browser clients.

use axum::http::header::HeaderName;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Permissive CORS layer: any origin, any method, any header, credentials
/// allowed.
///
/// Credentialed requests cannot be answered with the `*` wildcard, so the
/// layer mirrors the request's origin, method, and headers instead, which is
/// the credential-compatible spelling of "allow everything". Three custom
/// headers are exposed for the frontend's redirect diagnostics; no handler in
/// this gateway sets them, but the proxy in front of it may.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([
            HeaderName::from_static("x-original-location"),
            HeaderName::from_static("x-redirect-blocked"),
            HeaderName::from_static("x-request-path"),
        ])
}
