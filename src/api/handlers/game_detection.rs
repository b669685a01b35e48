//! Handler for the ML game detection endpoint.

use axum::Json;

use crate::api::dto::games::DetectedGame;
use crate::error::AppError;

/// Returns the fixed list of "detected" games.
///
/// # Endpoint
///
/// `GET /ml/game-detection`
///
/// Mocked data: the real detection pipeline lives elsewhere.
pub async fn game_detection_handler() -> Result<Json<Vec<DetectedGame>>, AppError> {
    Ok(Json(vec![
        DetectedGame {
            id: "valorant",
            name: "Valorant",
            is_detected: true,
        },
        DetectedGame {
            id: "csgo",
            name: "Counter-Strike 2",
            is_detected: true,
        },
    ]))
}
