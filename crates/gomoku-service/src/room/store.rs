//! In-memory room storage with per-room locking.
//!
//! Two sharded maps hold the shared state: invite code → room slot, and
//! participant → invite code. Map guards are only held long enough to
//! clone an `Arc` or insert/remove an entry; room contents are guarded by
//! one mutex per room, so operations on different rooms never wait on
//! each other.
//!
//! Lock order: a map guard is never held while waiting on a room mutex.
//! Holding a room mutex while touching the maps is allowed.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;

use gomoku_core::types::{InviteCode, ParticipantId};
use gomoku_entity::room::Room;

/// A room plus its tombstone flag.
#[derive(Debug)]
pub struct RoomSlot {
    /// Authoritative room state.
    pub room: Room,
    /// Set under the lock when the room is destroyed. A caller that fetched
    /// the slot before removal sees this once it gets the lock.
    pub closed: bool,
}

/// Shared handle to one room's slot.
pub type SharedSlot = Arc<Mutex<RoomSlot>>;

/// Registry of active rooms and the participant index.
#[derive(Debug, Default)]
pub struct RoomStore {
    /// Invite code → room slot.
    rooms: DashMap<InviteCode, SharedSlot>,
    /// Participant → invite code of the room they sit in.
    index: DashMap<ParticipantId, InviteCode>,
}

impl RoomStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `room` under its code unless that code is taken.
    ///
    /// The check and the insert happen under one shard lock, so concurrent
    /// creates can never share a code. On collision the room is handed back.
    pub fn insert_if_vacant(&self, room: Room) -> Result<SharedSlot, Room> {
        match self.rooms.entry(room.code.clone()) {
            Entry::Occupied(_) => Err(room),
            Entry::Vacant(vacant) => {
                let slot = Arc::new(Mutex::new(RoomSlot {
                    room,
                    closed: false,
                }));
                vacant.insert(Arc::clone(&slot));
                Ok(slot)
            }
        }
    }

    /// The slot for `code`, if a room is active under it.
    pub fn slot(&self, code: &InviteCode) -> Option<SharedSlot> {
        self.rooms.get(code).map(|entry| Arc::clone(entry.value()))
    }

    /// The code and slot of the room `participant` is indexed to.
    pub fn slot_for(&self, participant: &ParticipantId) -> Option<(InviteCode, SharedSlot)> {
        let code = self.index.get(participant).map(|entry| entry.value().clone())?;
        let slot = self.slot(&code)?;
        Some((code, slot))
    }

    /// Removes the room under `code`, but only if it is still `slot`.
    pub fn remove_room(&self, code: &InviteCode, slot: &SharedSlot) -> bool {
        self.rooms
            .remove_if(code, |_, current| Arc::ptr_eq(current, slot))
            .is_some()
    }

    /// Points `participant` at `code`, returning the previous code if any.
    pub fn bind(&self, participant: ParticipantId, code: InviteCode) -> Option<InviteCode> {
        self.index.insert(participant, code)
    }

    /// Drops the index entry for `participant` if it still points at `code`.
    pub fn unbind_if(&self, participant: &ParticipantId, code: &InviteCode) -> bool {
        self.index
            .remove_if(participant, |_, current| current == code)
            .is_some()
    }

    /// Number of active rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of indexed participants.
    pub fn participant_count(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(code: &str) -> Room {
        Room::new(InviteCode::parse(code).unwrap(), ParticipantId::from("owner"), "Owner")
    }

    #[test]
    fn test_insert_rejects_duplicate_code() {
        let store = RoomStore::new();
        assert!(store.insert_if_vacant(room("AAAAAA")).is_ok());
        let rejected = store.insert_if_vacant(room("AAAAAA")).unwrap_err();
        assert_eq!(rejected.code.as_str(), "AAAAAA");
        assert_eq!(store.room_count(), 1);
    }

    #[test]
    fn test_remove_room_only_removes_same_slot() {
        let store = RoomStore::new();
        let code = InviteCode::parse("BBBBBB").unwrap();
        let first = store.insert_if_vacant(room("BBBBBB")).unwrap();
        assert!(store.remove_room(&code, &first));

        let second = store.insert_if_vacant(room("BBBBBB")).unwrap();
        // A stale handle must not evict the room that reused the code.
        assert!(!store.remove_room(&code, &first));
        assert!(store.slot(&code).is_some());
        assert!(store.remove_room(&code, &second));
    }

    #[test]
    fn test_bind_and_unbind_if() {
        let store = RoomStore::new();
        let pid = ParticipantId::from("p1");
        let a = InviteCode::parse("AAAAAA").unwrap();
        let b = InviteCode::parse("BBBBBB").unwrap();

        assert_eq!(store.bind(pid.clone(), a.clone()), None);
        assert_eq!(store.bind(pid.clone(), b.clone()), Some(a.clone()));

        assert!(!store.unbind_if(&pid, &a));
        assert_eq!(store.participant_count(), 1);
        assert!(store.unbind_if(&pid, &b));
        assert_eq!(store.participant_count(), 0);
    }

    #[test]
    fn test_slot_for_follows_index() {
        let store = RoomStore::new();
        let pid = ParticipantId::from("owner");
        let slot = store.insert_if_vacant(room("CCCCCC")).unwrap();
        assert!(store.slot_for(&pid).is_none());

        store.bind(pid.clone(), InviteCode::parse("CCCCCC").unwrap());
        let (code, found) = store.slot_for(&pid).unwrap();
        assert_eq!(code.as_str(), "CCCCCC");
        assert!(Arc::ptr_eq(&slot, &found));
    }
}
