//! Room manager failures.
//!
//! Each variant names one rejected precondition. None of them leave a room
//! partially modified: every check runs before the first write.

use thiserror::Error;

use gomoku_core::error::{AppError, ErrorKind};
use gomoku_entity::board::Position;

/// Why a room operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// No active room matches the code, or the participant is not indexed.
    #[error("Room not found")]
    RoomNotFound,

    /// The participant has no seat in the room it is indexed to.
    #[error("Player not found in room")]
    ParticipantNotFound,

    /// Both seats are taken.
    #[error("Room is full (at most 2 players)")]
    RoomFull,

    /// Seats are frozen once a game has started or finished.
    #[error("Game has already started, cannot join")]
    GameAlreadyStarted,

    /// Readiness cannot change mid-game.
    #[error("Game in progress, cannot change ready state")]
    GameInProgress,

    /// Moves are only accepted while a game is running.
    #[error("Game is not in progress")]
    GameNotInProgress,

    /// Restart is only allowed after a game has finished.
    #[error("Game has not finished yet")]
    GameNotFinished,

    /// The acting player's color does not hold the turn.
    #[error("It is not your turn")]
    NotYourTurn,

    /// The position lies off the board.
    #[error("Position {0} is outside the board")]
    OutOfBounds(Position),

    /// The target cell already holds a stone.
    #[error("Position {0} is already occupied")]
    CellOccupied(Position),

    /// Every generated invite code collided with an active room.
    #[error("Could not generate a unique room code after {attempts} attempts, please retry")]
    CodeExhausted {
        /// Codes tried before giving up.
        attempts: u32,
    },

    /// A client-supplied invite code is malformed.
    #[error("Invalid invite code: {0}")]
    InvalidInviteCode(String),

    /// A display name is empty or too long.
    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),
}

impl RoomError {
    /// Classify into the application-wide taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound | Self::ParticipantNotFound => ErrorKind::NotFound,
            Self::RoomFull
            | Self::GameAlreadyStarted
            | Self::GameInProgress
            | Self::GameNotInProgress
            | Self::GameNotFinished => ErrorKind::Conflict,
            Self::NotYourTurn | Self::OutOfBounds(_) | Self::CellOccupied(_) => {
                ErrorKind::InvalidMove
            }
            Self::CodeExhausted { .. } => ErrorKind::ResourceExhaustion,
            Self::InvalidInviteCode(_) | Self::InvalidPlayerName(_) => ErrorKind::Validation,
        }
    }

    /// Stable machine-readable reason, finer-grained than [`ErrorKind`].
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::ParticipantNotFound => "PARTICIPANT_NOT_FOUND",
            Self::RoomFull => "ROOM_FULL",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameInProgress => "GAME_IN_PROGRESS",
            Self::GameNotInProgress => "GAME_NOT_IN_PROGRESS",
            Self::GameNotFinished => "GAME_NOT_FINISHED",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::OutOfBounds(_) => "OUT_OF_BOUNDS",
            Self::CellOccupied(_) => "CELL_OCCUPIED",
            Self::CodeExhausted { .. } => "CODE_EXHAUSTED",
            Self::InvalidInviteCode(_) => "INVALID_INVITE_CODE",
            Self::InvalidPlayerName(_) => "INVALID_PLAYER_NAME",
        }
    }
}

impl From<RoomError> for AppError {
    fn from(err: RoomError) -> Self {
        AppError::with_source(err.kind(), err.to_string(), err)
    }
}
