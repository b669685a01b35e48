//! DTOs for the game listing and detection endpoints.

use serde::Serialize;

/// A game known to the optimizer, with its current optimization flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub is_optimized: bool,
}

/// A game reported by the (mocked) detection pipeline.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedGame {
    pub id: &'static str,
    pub name: &'static str,
    pub is_detected: bool,
}
