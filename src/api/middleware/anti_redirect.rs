//! Anti-redirect and anti-cache response headers.
//!
//! Every response leaving the gateway, success or error, carries a fixed
//! header set that stops intermediaries from caching bodies or rewriting
//! redirects, and stops browsers from sniffing content types or framing the
//! responses. The layer is installed outermost in the router so panic
//! responses and CORS preflights carry the headers too.

use axum::{
    extract::Request,
    http::{HeaderValue, header::HeaderName},
    middleware::Next,
    response::Response,
};

/// The fixed header set applied to every response.
const RESPONSE_HEADERS: [(HeaderName, HeaderValue); 6] = [
    (
        HeaderName::from_static("x-no-redirect"),
        HeaderValue::from_static("1"),
    ),
    (
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    ),
    (
        HeaderName::from_static("pragma"),
        HeaderValue::from_static("no-cache"),
    ),
    (
        HeaderName::from_static("expires"),
        HeaderValue::from_static("0"),
    ),
    (
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    ),
    (
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    ),
];

/// Stamps the fixed header set onto the response.
pub async fn anti_redirect_mw(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();
    for (name, value) in RESPONSE_HEADERS {
        headers.insert(name, value);
    }

    response
}
