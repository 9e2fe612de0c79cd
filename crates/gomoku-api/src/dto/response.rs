//! Response DTOs.

use serde::{Deserialize, Serialize};

use gomoku_service::RoomStats;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Result of a leave request.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveResponse<R: Serialize> {
    /// Whether a seat was actually released.
    pub left: bool,
    /// Whether the room was destroyed because it emptied.
    pub room_closed: bool,
    /// Room after the departure; absent if the caller held no seat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<R>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Room counters.
    pub rooms: RoomStats,
}
