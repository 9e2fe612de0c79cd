//! # gomoku-service
//!
//! The room manager: owns every active room and the participant→room
//! index, and exposes the session operations (create, join, ready,
//! move, restart, leave, lookup) as transactions on a single room.
//!
//! Services follow constructor injection; the manager is built once at
//! startup and shared behind an `Arc`.

pub mod room;

pub use room::{
    CodeGenerator, Departure, RandomCodeGenerator, RoomError, RoomManager, RoomStats,
};
