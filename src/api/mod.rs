//! HTTP layer: DTOs, handlers, and middleware.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Header, CORS, and tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
