//! The playing grid and the rules that read it.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::stone::Stone;

/// Cells per side.
pub const BOARD_SIZE: usize = 15;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// The four axes through a cell; each is walked in both directions.
const AXES: [(i32, i32); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal
    (1, -1), // anti-diagonal
];

/// A `BOARD_SIZE` x `BOARD_SIZE` grid of optional stones.
///
/// Serialized as a row-major nested array where empty cells are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Stone>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The stone at `pos`, or `None` if the cell is empty or off the board.
    pub fn get(&self, pos: Position) -> Option<Stone> {
        if !pos.in_bounds() {
            return None;
        }
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// True iff `pos` is on the board and its cell is empty.
    pub fn is_legal(&self, pos: Position) -> bool {
        pos.in_bounds() && self.cells[pos.row as usize][pos.col as usize].is_none()
    }

    /// Put `stone` at `pos`.
    ///
    /// Legality is the caller's contract: this does not check occupancy.
    /// An out-of-bounds position is ignored rather than panicking.
    pub fn place(&mut self, pos: Position, stone: Stone) {
        if pos.in_bounds() {
            self.cells[pos.row as usize][pos.col as usize] = Some(stone);
        }
    }

    /// Whether the stone just placed at `last_move` completes a run of at
    /// least [`WIN_LENGTH`] along any axis.
    ///
    /// Only the four lines through `last_move` are inspected: for each axis
    /// the run starts at 1 and is extended outward in both directions until
    /// the edge or a cell that is not `stone`.
    pub fn check_win(&self, last_move: Position, stone: Stone) -> bool {
        AXES.iter().any(|&(dr, dc)| {
            let run = 1 + self.run_length(last_move, dr, dc, stone)
                + self.run_length(last_move, -dr, -dc, stone);
            run >= WIN_LENGTH
        })
    }

    /// Consecutive `stone` cells starting one step from `origin`.
    fn run_length(&self, origin: Position, dr: i32, dc: i32, stone: Stone) -> usize {
        (1..)
            .map(|step| origin.offset(dr, dc, step))
            .take_while(|pos| self.get(*pos) == Some(stone))
            .count()
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
