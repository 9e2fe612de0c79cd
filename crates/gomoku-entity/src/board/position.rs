//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::grid::BOARD_SIZE;

/// A board coordinate as sent by a client.
///
/// Components are signed so that negative or oversized input survives
/// deserialization and is rejected by bounds checks instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether both components lie in `[0, BOARD_SIZE)`.
    pub fn in_bounds(&self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Step `steps` cells along `(dr, dc)`.
    pub(crate) fn offset(&self, dr: i32, dc: i32, steps: i32) -> Self {
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
