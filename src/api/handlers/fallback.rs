//! Catch-all handler for unmatched paths.

use axum::Json;

use crate::api::dto::message::MessageResponse;

/// Absorbs any path not matched by a declared route.
///
/// # Endpoint
///
/// `GET /` and any otherwise-unmatched path
///
/// Responds 200 with a placeholder body instead of 404. In production the
/// frontend routes are served by the reverse proxy in front of this gateway;
/// answering 404 here was observed to trigger client-side redirect loops, so
/// the success-shaped fallback is intentional. Preserve it.
pub async fn fallback_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Esta rota deve ser servida pelo frontend",
    })
}
