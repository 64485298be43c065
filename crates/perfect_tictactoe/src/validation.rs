//! Reachability checks for boards that did not come from [`crate::result`].
//!
//! The rules functions trust their input. Boards parsed from text or built
//! square by square should pass [`validate`] first.

use crate::error::BoardError;
use crate::rules::win::{LINES, line_owner};
use crate::{Board, Player};
use tracing::instrument;

/// Checks that some legal game starting from the empty board reaches `board`.
///
/// # Errors
///
/// - [`BoardError::InvalidPieceCounts`] unless X has as many marks as O or one more.
/// - [`BoardError::MultipleWinners`] when both players own a line.
/// - [`BoardError::PlayAfterWin`] when the winner did not make the last move.
#[instrument(skip(board))]
pub fn validate(board: &Board) -> Result<(), BoardError> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    if x_count != o_count && x_count != o_count + 1 {
        return Err(BoardError::InvalidPieceCounts { x_count, o_count });
    }

    // With at most five marks apiece, two lines owned by one player always
    // share the cell of the completing move.
    match (owns_line(board, Player::X), owns_line(board, Player::O)) {
        (true, true) => Err(BoardError::MultipleWinners),
        (true, false) if x_count != o_count + 1 => Err(BoardError::PlayAfterWin { winner: Player::X }),
        (false, true) if x_count != o_count => Err(BoardError::PlayAfterWin { winner: Player::O }),
        _ => Ok(()),
    }
}

fn owns_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|&line| line_owner(board, line) == Some(player))
}
