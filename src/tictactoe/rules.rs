//! Turn order, move generation and result detection
//!
//! All rules are free functions over a [`Board`] value. None of them mutate
//! their input: [`apply`] returns a fresh board and leaves the parent intact,
//! which is what lets the search explore sibling branches independently.

use serde::{Deserialize, Serialize};

use super::{
    Player,
    board::{Action, Board},
    lines::LineAnalyzer,
};
use crate::error::ActionRejection;

/// Whose turn it is, or that nobody may move any more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    ToMove(Player),
    GameOver,
}

impl Turn {
    /// The player to move, `None` once the game is over
    pub fn player(self) -> Option<Player> {
        match self {
            Turn::ToMove(player) => Some(player),
            Turn::GameOver => None,
        }
    }
}

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// Determine whose turn it is from the piece counts.
///
/// X moves whenever it has not placed more marks than O; otherwise O moves.
/// Terminal boards report [`Turn::GameOver`].
pub fn player_to_move(board: &Board) -> Turn {
    if terminal(board) {
        return Turn::GameOver;
    }
    let count = board.counts();
    if count.x <= count.o {
        Turn::ToMove(Player::X)
    } else {
        Turn::ToMove(Player::O)
    }
}

/// Every empty cell in row-major order; empty once the game is over.
///
/// The order is fixed because the search breaks ties by taking the first
/// optimal action it meets.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    if terminal(board) {
        return Vec::new();
    }
    board.empty_positions().map(Action::from_index).collect()
}

/// Every legal action paired with the board it produces, in the order of
/// [`legal_actions`]. Empty once the game is over.
pub fn successors(board: &Board) -> Vec<(Action, Board)> {
    let Turn::ToMove(player) = player_to_move(board) else {
        return Vec::new();
    };
    board
        .empty_positions()
        .map(|index| (Action::from_index(index), board.with_cell(index, player.to_cell())))
        .collect()
}

/// Place the mark of the player to move at `action`, returning the new board.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidAction`] when the coordinates leave the
/// board, the cell is occupied, or the board is already terminal.
#[must_use = "apply returns a new board; the original is unchanged"]
pub fn apply(board: &Board, action: Action) -> Result<Board, crate::Error> {
    let reject = |reason| crate::Error::InvalidAction {
        row: action.row,
        col: action.col,
        reason,
    };

    let index = action
        .index()
        .ok_or_else(|| reject(ActionRejection::OutOfBounds))?;

    if board.cells()[index].to_player().is_some() {
        return Err(reject(ActionRejection::Occupied));
    }

    let player = player_to_move(board)
        .player()
        .ok_or_else(|| reject(ActionRejection::GameOver))?;

    Ok(board.with_cell(index, player.to_cell()))
}

/// Owner of a completed row, column or diagonal.
///
/// Lines are scanned rows first, then columns, then diagonals, and the first
/// complete line decides. Under legal play at most one player can own lines.
pub fn winner(board: &Board) -> Option<Player> {
    LineAnalyzer::first_complete_line(board.cells()).map(|(_, player)| player)
}

/// Check if the game is over (win or full board)
pub fn terminal(board: &Board) -> bool {
    board.is_full() || winner(board).is_some()
}
