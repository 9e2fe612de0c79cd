//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use gomoku_core::types::ParticipantId;
use gomoku_entity::board::Position;

/// Create room request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// Display name of the creator.
    #[validate(length(min = 1, message = "Player name is required"))]
    pub player_name: String,
    /// Client-chosen participant id.
    #[validate(length(min = 1, message = "Player id is required"))]
    pub player_id: String,
}

/// Join room request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinRoomRequest {
    /// Invite code; case and surrounding whitespace are ignored.
    #[validate(length(min = 1, message = "Room code is required"))]
    pub code: String,
    /// Display name of the joiner.
    #[validate(length(min = 1, message = "Player name is required"))]
    pub player_name: String,
    /// Client-chosen participant id.
    #[validate(length(min = 1, message = "Player id is required"))]
    pub player_id: String,
}

/// Body for actions that only identify the acting participant
/// (ready, restart, leave).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlayerRequest {
    /// Client-chosen participant id.
    #[validate(length(min = 1, message = "Player id is required"))]
    pub player_id: String,
}

/// Move request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveRequest {
    /// Client-chosen participant id.
    #[validate(length(min = 1, message = "Player id is required"))]
    pub player_id: String,
    /// Target cell. Range is checked by the room manager.
    pub position: Position,
}

/// Query for `GET /api/rooms`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomLookupQuery {
    /// Participant whose room to fetch.
    #[validate(length(min = 1, message = "Player id is required"))]
    pub player_id: String,
}

/// Typed participant id from a request field.
pub fn participant(id: &str) -> ParticipantId {
    ParticipantId::from(id.trim())
}
