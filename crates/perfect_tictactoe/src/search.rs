//! Exhaustive minimax search.
//!
//! X maximizes and O minimizes the [`utility`] of the terminal board. Every
//! call walks the full remaining game tree: there is no pruning and no
//! caching, so values depend only on the board passed in.

use crate::generator::actions;
use crate::outcome::utility;
use crate::rules::{current_player, terminal};
use crate::transition::result;
use crate::{Board, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a board under perfect play, with the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    value: i32,
    best_move: Option<Move>,
    nodes: u64,
}

impl Evaluation {
    /// Game-theoretic value from X's perspective (-1, 0 or 1).
    pub fn value(&self) -> i32 {
        self.value
    }

    /// First optimal move for the side to move; `None` on a terminal board.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Number of boards visited while searching.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Per-call search context. Only counts visited boards.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn max_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }

        let mut v = i32::MIN;
        for mv in actions(board) {
            v = v.max(self.min_value(&result(board, mv)));
        }
        v
    }

    fn min_value(&mut self, board: &Board) -> i32 {
        self.nodes += 1;
        if terminal(board) {
            return utility(board);
        }

        let mut v = i32::MAX;
        for mv in actions(board) {
            v = v.min(self.max_value(&result(board, mv)));
        }
        v
    }

    /// Value of `board` for `player` and the first move reaching it.
    fn choose(&mut self, board: &Board, player: Player) -> (i32, Option<Move>) {
        let moves = actions(board);
        match player {
            Player::X => {
                let target = self.max_value(board);
                let best = moves
                    .into_iter()
                    .find(|&mv| self.min_value(&result(board, mv)) == target);
                (target, best)
            }
            Player::O => {
                let target = self.min_value(board);
                let best = moves
                    .into_iter()
                    .find(|&mv| self.max_value(&result(board, mv)) == target);
                (target, best)
            }
        }
    }
}

/// Best value X can force from `board`, assuming O replies perfectly.
#[instrument(level = "trace", skip(board))]
pub fn max_value(board: &Board) -> i32 {
    Search::default().max_value(board)
}

/// Best value O can force from `board`, assuming X replies perfectly.
#[instrument(level = "trace", skip(board))]
pub fn min_value(board: &Board) -> i32 {
    Search::default().min_value(board)
}

/// Searches the full tree below `board`.
///
/// On a terminal board the value is its utility and there is no move.
/// Ties between equally good moves go to the first in row-major order.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let Some(player) = current_player(board) else {
        return Evaluation {
            value: utility(board),
            best_move: None,
            nodes: 0,
        };
    };

    let mut search = Search::default();
    let (value, best_move) = search.choose(board, player);

    debug!(
        %player,
        value,
        best_move = ?best_move,
        nodes = search.nodes,
        "Search complete"
    );

    Evaluation {
        value,
        best_move,
        nodes: search.nodes,
    }
}

/// Returns the optimal move for the player to move, or `None` if the game
/// is over.
#[instrument(skip(board))]
pub fn minimax(board: &Board) -> Option<Move> {
    evaluate(board).best_move()
}
