//! # gomoku-entity
//!
//! Domain models for the gomoku room server: the board engine (grid,
//! stones, move legality, win detection) and the room/player/status
//! value objects that the room manager mutates and hands out as snapshots.
//! Everything here is plain data plus pure functions; no locking happens
//! in this crate.

pub mod board;
pub mod room;
