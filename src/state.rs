use std::sync::Arc;

use crate::config::Config;

/// Shared application state injected into every handler.
///
/// The gateway keeps no mutable state: the only thing handlers need is the
/// configuration snapshot taken at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}
