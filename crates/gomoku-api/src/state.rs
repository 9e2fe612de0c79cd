//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use gomoku_core::config::AppConfig;
use gomoku_service::RoomManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Authoritative room manager
    pub rooms: Arc<RoomManager>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Builds state around a fresh room manager configured from `config`.
    pub fn new(config: AppConfig) -> Self {
        let rooms = Arc::new(RoomManager::new(config.rooms.clone()));
        Self::with_rooms(config, rooms)
    }

    /// Builds state around an existing room manager.
    pub fn with_rooms(config: AppConfig, rooms: Arc<RoomManager>) -> Self {
        Self {
            config: Arc::new(config),
            rooms,
            started_at: Instant::now(),
        }
    }
}
