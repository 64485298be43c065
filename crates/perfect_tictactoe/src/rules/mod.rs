//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so search and validation can compose them freely.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use turn::{current_player, terminal};
pub use win::winner;
