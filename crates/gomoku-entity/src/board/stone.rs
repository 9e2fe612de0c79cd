//! Stone colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two stone colors. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    /// First player's stone.
    Black,
    /// Second player's stone.
    White,
}

impl Stone {
    /// The color that opens every game.
    pub const FIRST: Stone = Stone::Black;

    /// The other color.
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Return the color as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
