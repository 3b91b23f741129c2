//! Terminal board scoring

use crate::tictactoe::{Board, Player, rules};

/// Score of a board from X's point of view: 1 if X owns a line, -1 if O
/// does, 0 otherwise.
///
/// Only meaningful on terminal boards. A non-terminal board without a
/// complete line scores 0, the same as a draw.
pub fn utility(board: &Board) -> i32 {
    match rules::winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
