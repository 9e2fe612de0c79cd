//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gomoku_core::types::{InviteCode, ParticipantId, RoomId};

use crate::board::{Board, Position, Stone};

use super::player::Player;
use super::status::GameStatus;

/// Seats per room.
pub const MAX_PLAYERS: usize = 2;

/// A two-seat session and the state of its current game.
///
/// Clones of this struct are what callers receive as snapshots; the
/// authoritative copy lives inside the room manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Internal identifier.
    pub id: RoomId,
    /// Shareable invite code.
    pub code: InviteCode,
    /// Seated players in join order; the first is the owner.
    pub players: Vec<Player>,
    /// Current game status.
    pub status: GameStatus,
    /// Current board.
    pub board: Board,
    /// Color allowed to move next.
    pub current_turn: Stone,
    /// Winner of the last finished game, if any.
    pub winner: Option<Stone>,
    /// Most recently placed stone in the current game.
    pub last_move: Option<Position>,
    /// Stones placed in the current game.
    pub move_count: u32,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// Games started in this room.
    pub game_count: u32,
}

impl Room {
    /// A new waiting room with `owner` in the first seat holding the
    /// opening color.
    pub fn new(code: InviteCode, owner_id: ParticipantId, owner_name: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            code,
            players: vec![Player::new(owner_id, owner_name, Stone::FIRST)],
            status: GameStatus::Waiting,
            board: Board::empty(),
            current_turn: Stone::FIRST,
            winner: None,
            last_move: None,
            move_count: 0,
            created_at: Utc::now(),
            game_count: 0,
        }
    }

    /// Whether every seat is taken.
    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    /// Whether nobody is seated.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// The seat held by `id`.
    pub fn player(&self, id: &ParticipantId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Mutable access to the seat held by `id`.
    pub fn player_mut(&mut self, id: &ParticipantId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    /// The first color no seated player holds, preferring the opening color.
    pub fn free_color(&self) -> Option<Stone> {
        [Stone::Black, Stone::White]
            .into_iter()
            .find(|&c| self.players.iter().all(|p| p.color != Some(c)))
    }

    /// Whether every seated player is ready (vacuously false when empty).
    pub fn all_ready(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| p.ready)
    }

    /// Clear every player's ready flag.
    pub fn clear_ready(&mut self) {
        for player in &mut self.players {
            player.ready = false;
        }
    }

    /// Empty the board and hand the move to the opening color.
    pub fn reset_game(&mut self) {
        self.board = Board::empty();
        self.current_turn = Stone::FIRST;
        self.winner = None;
        self.last_move = None;
        self.move_count = 0;
    }

    /// Recompute a lobby status from seat readiness.
    ///
    /// Does nothing outside the lobby states, and never starts a game.
    pub fn refresh_lobby_status(&mut self) {
        if !self.status.is_lobby() {
            return;
        }
        self.status = if self.all_ready() && !self.is_full() {
            GameStatus::Ready
        } else {
            GameStatus::Waiting
        };
    }
}
