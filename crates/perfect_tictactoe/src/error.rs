//! Board parsing and validation errors.

use derive_more::{Display, Error};

/// A board that could not be parsed, or that no legal game can reach.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The text did not contain exactly nine cells.
    #[display("Board must have {expected} cells, got {got}")]
    InvalidLength {
        /// Required number of cells.
        expected: usize,
        /// Number of cells found.
        got: usize,
    },

    /// A cell character was not one of `X`, `O`, `.`, `-` or `_`.
    #[display("Invalid cell character '{character}' at index {index}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Cell index (0-8) where it appeared.
        index: usize,
    },

    /// X must have as many marks as O, or exactly one more.
    #[display("Invalid piece counts: X={x_count}, O={o_count}")]
    InvalidPieceCounts {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },

    /// Both players own a complete line.
    #[display("Both players have three in a row")]
    MultipleWinners,

    /// The winner's mark count does not match them having moved last.
    #[display("{winner} has three in a row but play continued")]
    PlayAfterWin {
        /// Player owning the winning line.
        #[error(not(source))]
        winner: crate::Player,
    },
}
