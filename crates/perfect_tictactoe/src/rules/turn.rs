//! Turn order and terminality.

use super::{draw::is_full, win::winner};
use crate::{Board, Player};
use tracing::instrument;

/// Checks whether the game is over: someone has won or no square is left.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Returns the player who has the next turn, or `None` once the game is over.
///
/// Derived from mark counts alone: O moves when X is ahead, otherwise X.
/// The board is assumed reachable (X ahead by at most one); use
/// [`crate::validate`] for boards from untrusted sources.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Option<Player> {
    if terminal(board) {
        return None;
    }

    if board.count(Player::X) > board.count(Player::O) {
        Some(Player::O)
    } else {
        Some(Player::X)
    }
}
