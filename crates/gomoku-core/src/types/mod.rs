//! Shared value types.

pub mod code;
pub mod id;

pub use code::{INVITE_CODE_ALPHABET, INVITE_CODE_LEN, InviteCode};
pub use id::{ParticipantId, RoomId};
