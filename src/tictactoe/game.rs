//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    board::{Action, Board, Player},
    rules,
};
use crate::error::ActionRejection;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues
    pub fn of(board: &Board) -> Option<Self> {
        if !rules::terminal(board) {
            return None;
        }
        Some(match rules::winner(board) {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        })
    }

    /// Utility of the outcome from X's point of view
    pub fn utility(self) -> i32 {
        match self {
            GameOutcome::Win(Player::X) => 1,
            GameOutcome::Win(Player::O) => -1,
            GameOutcome::Draw => 0,
        }
    }
}

/// A complete game with history.
///
/// The board after every move is derived from `initial` by replaying the
/// recorded moves. Deserialization replays the record and rejects histories
/// that do not follow the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    initial: Board,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
    /// Board after each move; `boards[0]` is `initial`
    #[serde(skip)]
    boards: Vec<Board>,
}

/// Serialized form of a [`Game`], validated on the way in
#[derive(Deserialize)]
struct GameRecord {
    initial: Board,
    #[serde(default)]
    moves: Vec<Move>,
    #[serde(default)]
    outcome: Option<GameOutcome>,
}

impl TryFrom<GameRecord> for Game {
    type Error = crate::Error;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let mut game = Game::from_board(record.initial);
        for (index, mv) in record.moves.into_iter().enumerate() {
            let expected = rules::player_to_move(&game.current()).player();
            if expected.is_some_and(|player| player != mv.player) {
                return Err(crate::Error::InconsistentGame {
                    message: format!("move {index} {} was recorded for {}", mv.action, mv.player),
                });
            }
            game.play(mv.action)?;
        }
        if record.outcome != game.outcome {
            return Err(crate::Error::InconsistentGame {
                message: format!(
                    "recorded outcome {:?} does not match replayed outcome {:?}",
                    record.outcome, game.outcome
                ),
            });
        }
        Ok(game)
    }
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(rules::initial_state())
    }

    /// Continue play from an arbitrary position
    pub fn from_board(board: Board) -> Self {
        Game {
            initial: board,
            moves: Vec::new(),
            outcome: GameOutcome::of(&board),
            boards: vec![board],
        }
    }

    /// Play an action for whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] when the action is off the
    /// board, targets an occupied cell, or the game is already over. The game
    /// is unchanged on error.
    #[instrument(skip(self), fields(board = %self.current().encode()))]
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        let current = self.current();
        let next = rules::apply(&current, action)?;
        let player = rules::player_to_move(&current)
            .player()
            .ok_or(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
                reason: ActionRejection::GameOver,
            })?;

        self.moves.push(Move { action, player });
        self.boards.push(next);
        self.outcome = GameOutcome::of(&next);

        if let Some(outcome) = self.outcome {
            tracing::debug!(?outcome, moves = self.moves.len(), "game finished");
        }
        Ok(())
    }

    /// Board the game started from
    pub fn initial(&self) -> Board {
        self.initial
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Result once the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Current board
    pub fn current(&self) -> Board {
        self.boards.last().copied().unwrap_or(self.initial)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The sequence of boards, starting with the initial one
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
