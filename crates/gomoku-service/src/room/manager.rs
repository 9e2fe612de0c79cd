//! The room manager: session operations as per-room transactions.
//!
//! Every operation follows the same shape: resolve the room slot through
//! the store, take that room's lock, check every precondition, then
//! mutate and clone a snapshot before the guard drops. A failed check
//! returns before the first write, so rejected calls leave no trace.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{debug, info, warn};

use gomoku_core::config::rooms::RoomsConfig;
use gomoku_core::types::{InviteCode, ParticipantId};
use gomoku_entity::board::Position;
use gomoku_entity::room::{GameStatus, MAX_PLAYERS, Player, Room};

use super::code::{CodeGenerator, RandomCodeGenerator};
use super::error::RoomError;
use super::store::{RoomSlot, RoomStore, SharedSlot};

/// Outcome of a leave request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// The seat was released; the snapshot shows the room afterwards
    /// (with no players if the room was destroyed).
    Left(Room),
    /// The participant was not seated anywhere.
    AlreadyLeft,
}

/// Point-in-time counters for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomStats {
    /// Rooms currently active.
    pub active_rooms: usize,
    /// Participants currently indexed to a room.
    pub seated_players: usize,
    /// Games started since the process began.
    pub games_started: u64,
}

/// Authoritative owner of all rooms.
#[derive(Debug)]
pub struct RoomManager {
    /// Rooms and participant index.
    store: RoomStore,
    /// Invite-code source.
    codes: Arc<dyn CodeGenerator>,
    /// Creation and naming limits.
    config: RoomsConfig,
    /// Games started since startup.
    games_started: AtomicU64,
}

impl RoomManager {
    /// Creates a manager that draws random invite codes.
    pub fn new(config: RoomsConfig) -> Self {
        Self::with_code_generator(config, Arc::new(RandomCodeGenerator::new()))
    }

    /// Creates a manager with a custom invite-code source.
    pub fn with_code_generator(config: RoomsConfig, codes: Arc<dyn CodeGenerator>) -> Self {
        Self {
            store: RoomStore::new(),
            codes,
            config,
            games_started: AtomicU64::new(0),
        }
    }

    /// Opens a new room with `participant_id` in the first seat.
    ///
    /// Fails with [`RoomError::CodeExhausted`] if every candidate code
    /// collides with an active room.
    pub fn create_room(
        &self,
        player_name: &str,
        participant_id: &ParticipantId,
    ) -> Result<Room, RoomError> {
        let name = self.validate_name(player_name)?;
        let attempts = self.config.code_attempts.max(1);

        for attempt in 1..=attempts {
            let code = self.codes.generate();
            let room = Room::new(code.clone(), participant_id.clone(), name.clone());
            let snapshot = room.clone();

            if self.store.insert_if_vacant(room).is_err() {
                debug!(room = %code, attempt, "Invite code collision, retrying");
                continue;
            }

            info!(
                room = %code,
                participant = %participant_id,
                name = %name,
                "Room created"
            );
            self.rebind(participant_id, &code);
            return Ok(snapshot);
        }

        warn!(attempts, "Invite code generation exhausted");
        Err(RoomError::CodeExhausted { attempts })
    }

    /// Seats `participant_id` in the room identified by `code`.
    ///
    /// A participant already seated there just refreshes their name. A
    /// different id under an already-seated name takes over that seat
    /// (reconnect after the client lost its id).
    pub fn join_room(
        &self,
        code: &str,
        player_name: &str,
        participant_id: &ParticipantId,
    ) -> Result<Room, RoomError> {
        let code =
            InviteCode::parse(code).map_err(|_| RoomError::InvalidInviteCode(code.to_string()))?;
        let name = self.validate_name(player_name)?;
        let slot = self.store.slot(&code).ok_or(RoomError::RoomNotFound)?;

        let snapshot = {
            let mut guard = slot.lock();
            let room = Self::open_room(&mut guard)?;

            if let Some(player) = room.player_mut(participant_id) {
                player.name = name;
                debug!(room = %code, participant = %participant_id, "Player already seated");
            } else if let Some(player) = room.players.iter_mut().find(|p| p.name == name) {
                let previous = std::mem::replace(&mut player.id, participant_id.clone());
                self.store.unbind_if(&previous, &code);
                warn!(
                    room = %code,
                    name = %name,
                    previous = %previous,
                    participant = %participant_id,
                    "Seat rebound to new participant id by matching name"
                );
            } else {
                if room.is_full() {
                    return Err(RoomError::RoomFull);
                }
                if room.status != GameStatus::Waiting {
                    return Err(RoomError::GameAlreadyStarted);
                }
                let color = room.free_color().ok_or(RoomError::RoomFull)?;
                room.players
                    .push(Player::new(participant_id.clone(), name.clone(), color));
                room.refresh_lobby_status();
                info!(
                    room = %code,
                    participant = %participant_id,
                    color = %color,
                    players = room.players.len(),
                    "Player joined"
                );
            }

            room.clone()
        };

        self.rebind(participant_id, &code);
        Ok(snapshot)
    }

    /// Flips the participant's ready flag and starts a game once both
    /// seated players are ready.
    pub fn toggle_ready(&self, participant_id: &ParticipantId) -> Result<Room, RoomError> {
        let (code, slot) = self.resolve(participant_id)?;
        let mut guard = slot.lock();
        let room = Self::open_room(&mut guard)?;

        if room.status == GameStatus::InProgress {
            return Err(RoomError::GameInProgress);
        }

        let ready = match room.player_mut(participant_id) {
            Some(player) => {
                player.ready = !player.ready;
                player.ready
            }
            None => return Err(RoomError::ParticipantNotFound),
        };

        if room.status == GameStatus::Finished {
            // Negotiating the next game clears the finished board.
            room.reset_game();
            room.status = GameStatus::Waiting;
        }

        if room.players.len() == MAX_PLAYERS && room.all_ready() {
            room.reset_game();
            room.status = GameStatus::InProgress;
            room.game_count += 1;
            self.games_started.fetch_add(1, Ordering::Relaxed);
            info!(room = %code, game = room.game_count, "Game started");
        } else {
            room.refresh_lobby_status();
        }

        debug!(
            room = %code,
            participant = %participant_id,
            ready,
            status = %room.status,
            "Ready toggled"
        );
        Ok(room.clone())
    }

    /// Places the participant's stone at `position`.
    pub fn make_move(
        &self,
        participant_id: &ParticipantId,
        position: Position,
    ) -> Result<Room, RoomError> {
        let (code, slot) = self.resolve(participant_id)?;
        let mut guard = slot.lock();
        let room = Self::open_room(&mut guard)?;

        if room.status != GameStatus::InProgress {
            return Err(RoomError::GameNotInProgress);
        }
        let color = room
            .player(participant_id)
            .ok_or(RoomError::ParticipantNotFound)?
            .color;
        let color = match color {
            Some(color) if color == room.current_turn => color,
            _ => return Err(RoomError::NotYourTurn),
        };
        if !position.in_bounds() {
            return Err(RoomError::OutOfBounds(position));
        }
        if !room.board.is_legal(position) {
            return Err(RoomError::CellOccupied(position));
        }

        room.board.place(position, color);
        room.last_move = Some(position);
        room.move_count += 1;
        debug!(room = %code, color = %color, position = %position, "Stone placed");

        if room.board.check_win(position, color) {
            room.status = GameStatus::Finished;
            room.winner = Some(color);
            if let Some(player) = room.player_mut(participant_id) {
                player.wins += 1;
            }
            room.clear_ready();
            info!(
                room = %code,
                winner = %color,
                participant = %participant_id,
                moves = room.move_count,
                "Game won"
            );
        } else if room.board.is_full() {
            room.status = GameStatus::Finished;
            room.winner = None;
            room.clear_ready();
            info!(room = %code, moves = room.move_count, "Game drawn on a full board");
        } else {
            room.current_turn = color.opponent();
        }

        Ok(room.clone())
    }

    /// Clears a finished game so the players can negotiate a rematch.
    pub fn restart_game(&self, participant_id: &ParticipantId) -> Result<Room, RoomError> {
        let (code, slot) = self.resolve(participant_id)?;
        let mut guard = slot.lock();
        let room = Self::open_room(&mut guard)?;

        if room.status != GameStatus::Finished {
            return Err(RoomError::GameNotFinished);
        }

        room.reset_game();
        room.status = GameStatus::Waiting;
        room.clear_ready();
        info!(room = %code, participant = %participant_id, "Game restarted");
        Ok(room.clone())
    }

    /// Releases the participant's seat, destroying the room if it empties.
    ///
    /// Leaving mid-game ends the game without a winner. Calling this for a
    /// participant who is not seated is not an error.
    pub fn leave_room(&self, participant_id: &ParticipantId) -> Result<Departure, RoomError> {
        let Some((code, slot)) = self.store.slot_for(participant_id) else {
            debug!(participant = %participant_id, "Leave for participant with no room");
            return Ok(Departure::AlreadyLeft);
        };

        let departure = self.vacate_seat(&code, &slot, participant_id);
        self.store.unbind_if(participant_id, &code);
        Ok(departure)
    }

    /// Snapshot of the room under `code`.
    pub fn get_room(&self, code: &str) -> Result<Room, RoomError> {
        let code =
            InviteCode::parse(code).map_err(|_| RoomError::InvalidInviteCode(code.to_string()))?;
        let slot = self.store.slot(&code).ok_or(RoomError::RoomNotFound)?;
        let guard = slot.lock();
        if guard.closed {
            return Err(RoomError::RoomNotFound);
        }
        Ok(guard.room.clone())
    }

    /// Snapshot of the room `participant_id` is seated in.
    pub fn get_room_for_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Room, RoomError> {
        let (_, slot) = self.resolve(participant_id)?;
        let guard = slot.lock();
        if guard.closed {
            return Err(RoomError::RoomNotFound);
        }
        Ok(guard.room.clone())
    }

    /// Current counters. Reads the maps only; never takes a room lock.
    pub fn stats(&self) -> RoomStats {
        RoomStats {
            active_rooms: self.store.room_count(),
            seated_players: self.store.participant_count(),
            games_started: self.games_started.load(Ordering::Relaxed),
        }
    }

    fn resolve(&self, participant_id: &ParticipantId) -> Result<(InviteCode, SharedSlot), RoomError> {
        self.store
            .slot_for(participant_id)
            .ok_or(RoomError::RoomNotFound)
    }

    /// The room behind a locked slot, unless it has been destroyed.
    fn open_room(slot: &mut RoomSlot) -> Result<&mut Room, RoomError> {
        if slot.closed {
            return Err(RoomError::RoomNotFound);
        }
        Ok(&mut slot.room)
    }

    /// Points the index at `code` and vacates any seat the participant
    /// still held in another room.
    ///
    /// Runs after the new room's lock is released so no two room locks are
    /// ever held together.
    fn rebind(&self, participant_id: &ParticipantId, code: &InviteCode) {
        let Some(previous) = self.store.bind(participant_id.clone(), code.clone()) else {
            return;
        };
        if &previous == code {
            return;
        }
        if let Some(slot) = self.store.slot(&previous) {
            info!(
                room = %previous,
                participant = %participant_id,
                "Participant moved to another room, releasing old seat"
            );
            self.vacate_seat(&previous, &slot, participant_id);
        }
    }

    /// Removes `participant_id` from the room in `slot` and applies the
    /// departure rules. The participant index is left to the caller.
    fn vacate_seat(
        &self,
        code: &InviteCode,
        slot: &SharedSlot,
        participant_id: &ParticipantId,
    ) -> Departure {
        let mut guard = slot.lock();
        if guard.closed {
            return Departure::AlreadyLeft;
        }

        let room = &mut guard.room;
        let before = room.players.len();
        room.players.retain(|p| &p.id != participant_id);
        if room.players.len() == before {
            return Departure::AlreadyLeft;
        }
        info!(
            room = %code,
            participant = %participant_id,
            remaining = room.players.len(),
            "Player left"
        );

        if room.is_empty() {
            let snapshot = room.clone();
            guard.closed = true;
            self.store.remove_room(code, slot);
            info!(room = %code, "Room destroyed");
            return Departure::Left(snapshot);
        }

        if room.status == GameStatus::InProgress {
            room.status = GameStatus::Finished;
            room.winner = None;
            room.clear_ready();
            info!(room = %code, "Game abandoned");
        } else {
            room.refresh_lobby_status();
        }

        Departure::Left(room.clone())
    }

    /// Trimmed display name within the configured length.
    fn validate_name(&self, name: &str) -> Result<String, RoomError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RoomError::InvalidPlayerName("name must not be empty".to_string()));
        }
        let max = self.config.max_player_name_len;
        if trimmed.chars().count() > max {
            return Err(RoomError::InvalidPlayerName(format!(
                "name must be at most {max} characters"
            )));
        }
        Ok(trimmed.to_string())
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::new(RoomsConfig::default())
    }
}
