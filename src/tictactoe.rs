//! Tic-Tac-Toe board model and rules

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{Action, Board, Cell, PieceCount, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{
    Turn, apply, initial_state, legal_actions, player_to_move, successors, terminal, winner,
};
