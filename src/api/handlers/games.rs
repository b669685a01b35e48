//! Handler for the game listing endpoints.

use axum::Json;

use crate::api::dto::games::GameSummary;
use crate::error::AppError;

/// Returns the fixed list of games known to the optimizer.
///
/// # Endpoints
///
/// `GET /games` and `GET /api/games` (both wired to this handler)
///
/// Mocked data: real game detection is out of scope for this gateway.
pub async fn games_handler() -> Result<Json<Vec<GameSummary>>, AppError> {
    Ok(Json(vec![
        GameSummary {
            id: "valorant",
            name: "Valorant",
            is_optimized: false,
        },
        GameSummary {
            id: "csgo",
            name: "Counter-Strike 2",
            is_optimized: true,
        },
        GameSummary {
            id: "fortnite",
            name: "Fortnite",
            is_optimized: false,
        },
    ]))
}
