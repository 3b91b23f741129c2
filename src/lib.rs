//! Exhaustive minimax solver for Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable 3x3 board model with X moving first
//! - The rules: turn order, legal actions, move application, win and end detection
//! - Terminal evaluation and a full-depth minimax search for the best move
//! - Self-play between optimal and random policies
//! - The `ttt` command-line front end
//!
//! ```
//! use tictactoe_minimax::{search::best_move, tictactoe::{apply, initial_state, terminal}};
//!
//! let mut board = initial_state();
//! while let Some(action) = best_move(&board) {
//!     board = apply(&board, action).unwrap();
//! }
//! assert!(terminal(&board));
//! ```

pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{ActionRejection, Error, Result};
pub use search::{Minimax, SearchConfig, best_move, utility};
pub use tictactoe::{Action, Board, Cell, Player, Turn};
