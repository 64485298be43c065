//! Move values for tic-tac-toe.
//!
//! A move only names a cell. The mark written there is decided by the
//! board it is applied to, so the same move means different things on
//! different boards.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A `(row, column)` pair naming an empty cell to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    position: Position,
}

impl Move {
    /// Creates a move at the given position.
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Creates a move from `(row, col)` coordinates, or `None` if either is
    /// outside `[0, 2]`.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        Position::from_coords(row, col).map(Self::new)
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row of the target cell.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the target cell.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl From<Position> for Move {
    fn from(position: Position) -> Self {
        Self::new(position)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Error that can occur when applying a move through the checked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
