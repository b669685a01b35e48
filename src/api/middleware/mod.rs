//! HTTP middleware applied to every response.
//!
//! Provides the anti-redirect header set, permissive CORS, and request
//! tracing.

pub mod anti_redirect;
pub mod cors;
pub mod tracing;
