//! Board engine.

pub mod grid;
pub mod position;
pub mod stone;

pub use grid::{BOARD_SIZE, Board, WIN_LENGTH};
pub use position::Position;
pub use stone::Stone;
