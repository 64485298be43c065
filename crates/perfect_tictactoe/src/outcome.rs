//! Terminal evaluation: outcomes and their numeric payoff.

use crate::rules::{is_full, winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a board stands, from the rules' point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// X owns a line.
    #[display("X wins")]
    XWins,
    /// O owns a line.
    #[display("O wins")]
    OWins,
    /// Board is full and nobody owns a line.
    #[display("Draw")]
    Draw,
    /// Play continues.
    #[display("Not over")]
    NotOver,
}

impl Outcome {
    /// Payoff from X's perspective: 1, -1, or 0 for draws and unfinished games.
    pub fn utility(self) -> i32 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw | Outcome::NotOver => 0,
        }
    }
}

/// Classifies the board.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::NotOver,
    }
}

/// Returns 1 if X has won, -1 if O has won, 0 otherwise.
///
/// Callable on any board, but only meaningful once [`crate::terminal`] holds.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
