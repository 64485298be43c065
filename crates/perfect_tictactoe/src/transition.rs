//! Board transitions.

use crate::rules::{current_player, terminal};
use crate::{Board, Move, MoveError, Square};
use tracing::instrument;

/// Returns the board that results from playing `mv` on `board`.
///
/// The mark is chosen by [`current_player`] on the copy. `board` itself is
/// never modified. Playing on an occupied cell, or on a finished board,
/// leaves the copy unchanged; [`try_result`] reports those cases instead.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    let pos = mv.position();

    if let Some(player) = current_player(&next)
        && next.is_empty(pos)
    {
        next.set(pos, Square::Occupied(player));
    }

    next
}

/// Checked variant of [`result`] for moves from outside the search.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] on a terminal board and
/// [`MoveError::SquareOccupied`] when the target cell is taken.
#[instrument(skip(board))]
pub fn try_result(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if terminal(board) {
        return Err(MoveError::GameOver);
    }

    if !board.is_empty(mv.position()) {
        return Err(MoveError::SquareOccupied(mv.position()));
    }

    Ok(result(board, mv))
}
