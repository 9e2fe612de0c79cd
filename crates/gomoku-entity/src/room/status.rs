//! Game status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a room is in its game cycle.
///
/// `Waiting` → `Ready` → `InProgress` → `Finished`, and back to `Waiting`
/// on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Seats open or not everyone is ready.
    Waiting,
    /// Every seated player is ready but the room is not full yet.
    Ready,
    /// Stones are being placed.
    InProgress,
    /// Someone won, the board filled up, or a player left mid-game.
    Finished,
}

impl GameStatus {
    /// Pre-game states in which seats may still change.
    pub fn is_lobby(&self) -> bool {
        matches!(self, Self::Waiting | Self::Ready)
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Ready => "ready",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
