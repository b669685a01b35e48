//! Application error type and the top-level fault adapter.
//!
//! Handlers return `Result<_, AppError>`; any error reaching the response
//! boundary is rendered as the generic JSON body
//! `{"message": "Erro interno: <description>"}` with status 500. Panics that
//! escape a handler are funneled through the same adapter by the
//! `CatchPanicLayer` installed in [`crate::routes`], so callers always receive
//! a JSON object and never a raw error page.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::any::Any;

/// Prefix for user-visible internal error messages. Kept in Portuguese to
/// match the deployed contract the frontend expects.
const INTERNAL_ERROR_PREFIX: &str = "Erro interno";

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Errors that can surface from request handling.
///
/// The gateway deliberately has a single-class error taxonomy: every fault is
/// an internal error. There are no client-error or not-found variants because
/// no handler inspects its input and unmatched paths are absorbed by the
/// catch-all route.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(description: impl Into<String>) -> Self {
        Self::Internal(description.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(description) = self;
        internal_error_response(&description)
    }
}

/// Renders the generic 500 response body shared by [`AppError`] and the panic
/// adapter.
pub fn internal_error_response(description: &str) -> Response {
    let body = ErrorBody {
        message: format!("{INTERNAL_ERROR_PREFIX}: {description}"),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Converts a caught panic payload into the generic 500 response.
///
/// Used as the custom handler for `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let description = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Unhandled panic while producing a response: {description}");

    internal_error_response(&description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn internal_error_renders_generic_body() {
        let response = AppError::internal("boom").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["message"], "Erro interno: boom");
    }

    #[tokio::test]
    async fn panic_payload_description_is_preserved() {
        let response = handle_panic(Box::new("division by zero"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["message"], "Erro interno: division by zero");
    }
}
