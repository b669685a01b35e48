//! Data Transfer Objects for API responses.
//!
//! All bodies this gateway produces are fixed literals; the DTOs exist so the
//! wire shape is declared in one place and serialized with Serde rather than
//! assembled from ad-hoc JSON values.

pub mod games;
pub mod health;
pub mod message;
pub mod metrics;
