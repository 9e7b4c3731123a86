use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::engine::game::Game;

/// Shared application state passed to all handlers via Axum's State extractor.
///
/// One game is shared process-wide. The lock serializes engine access:
/// mutating handlers hold the write guard across validate+apply, so two
/// near-simultaneous moves can never act on a stale board.
pub struct AppState {
    pub game: RwLock<Game>,
    pub config: AppConfig,
    pub start_time: std::time::Instant,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(AppState {
            game: RwLock::new(Game::new()),
            config,
            start_time: std::time::Instant::now(),
        })
    }
}
