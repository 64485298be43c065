//! Legal move enumeration.

use crate::{Board, Move, Position};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns every empty cell as a move.
///
/// Terminality is not consulted: a won board with empty cells still
/// yields them. Callers check [`crate::terminal`] first.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Move> {
    Position::iter()
        .filter(|&pos| board.is_empty(pos))
        .map(Move::new)
        .collect()
}
