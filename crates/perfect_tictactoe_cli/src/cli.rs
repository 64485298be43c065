//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};

/// Perfect Tic-Tac-Toe - exhaustive minimax for the 3x3 game
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Perfect-play tic-tac-toe via full minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.`, `-` or `_`
/// for empty. Whitespace and `/` between rows are ignored, e.g. `XX./OO./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board to search from
        #[arg(short, long)]
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report turn, winner, terminal state and utility of a board
    Evaluate {
        /// Board to inspect
        #[arg(short, long)]
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let minimax play both sides until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<String>,
    },
}
