//! Room lifecycle and game state machine.
//!
//! - [`store`] holds rooms and the session index with per-room locking.
//! - [`code`] generates invite codes.
//! - [`manager`] implements the operations on top of both.

pub mod code;
pub mod error;
pub mod manager;
pub mod store;

pub use code::{CodeGenerator, RandomCodeGenerator};
pub use error::RoomError;
pub use manager::{Departure, RoomManager, RoomStats};
