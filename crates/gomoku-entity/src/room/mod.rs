//! Room domain entities.

pub mod model;
pub mod player;
pub mod status;

pub use model::{MAX_PLAYERS, Room};
pub use player::Player;
pub use status::GameStatus;
