//! Perfect-play tic-tac-toe.
//!
//! Pure game logic for the 3x3 board plus an exhaustive minimax search that
//! always finds a value-optimal move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`current_player`], [`winner`], [`terminal`], [`utility`], [`outcome`]
//! - **Moves**: [`actions`] enumerates them, [`result`] applies one to a copy
//! - **Search**: [`minimax`] picks a move; [`max_value`] / [`min_value`] score boards
//!
//! Boards are `Copy` values. Nothing here mutates a board it was handed.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Move, initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(mv) = minimax(&board) {
//!     board = result(&board, mv);
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//!
//! let board = "XX./OO./...".parse().unwrap();
//! assert_eq!(minimax(&board), Move::at(0, 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod generator;
mod outcome;
mod position;
pub mod rules;
mod search;
mod transition;
mod types;
mod validation;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, Player, Square, initial_state};

// Crate-level exports - Moves
pub use action::{Move, MoveError};
pub use generator::actions;
pub use transition::{result, try_result};

// Crate-level exports - Rules
pub use outcome::{Outcome, outcome, utility};
pub use rules::{current_player, terminal, winner};

// Crate-level exports - Search
pub use search::{Evaluation, evaluate, max_value, min_value, minimax};

// Crate-level exports - Validation
pub use error::BoardError;
pub use validation::validate;
