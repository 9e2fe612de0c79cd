//! A participant's seat in a room.

use serde::{Deserialize, Serialize};

use gomoku_core::types::ParticipantId;

use crate::board::Stone;

/// One human's seat: identity, display name, color, readiness, and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Client-chosen identity.
    pub id: ParticipantId,
    /// Display name.
    pub name: String,
    /// Assigned at join and kept for the room's lifetime.
    pub color: Option<Stone>,
    /// Whether the player has asked for the next game to start.
    pub ready: bool,
    /// Games won in this room.
    pub wins: u32,
}

impl Player {
    /// A fresh, not-ready seat holding `color`.
    pub fn new(id: ParticipantId, name: impl Into<String>, color: Stone) -> Self {
        Self {
            id,
            name: name.into(),
            color: Some(color),
            ready: false,
            wins: 0,
        }
    }
}
