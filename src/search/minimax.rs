//! Exhaustive minimax search
//!
//! X maximizes [`utility`], O minimizes it. The whole game tree is at most
//! nine plies deep, so every call walks it to the leaves unless a depth
//! budget is configured. Ties between equally good actions go to the action
//! met first in [`legal_actions`](rules::legal_actions) order (row-major).

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::evaluation::utility;
use crate::tictactoe::{Action, Board, Player, Turn, rules};

/// Search tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies below the root to explore before scoring a board with
    /// [`utility`]. `None` searches to the end of the game.
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Exact search with no depth budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how many plies below the root are explored.
    ///
    /// The root's own actions are always expanded, so a budget of 0 still
    /// yields a move on a non-terminal board.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Result of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Guaranteed value for X under optimal replies
    pub value: i32,
    /// Best action for the player to move; `None` on terminal boards
    pub action: Option<Action>,
    /// Boards visited, including the root
    pub nodes: u64,
}

/// Minimax searcher carrying its configuration and a node counter
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
    nodes: u64,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    /// Value and best action for X (the maximizer) at `board`
    pub fn max_value(&mut self, board: &Board) -> (i32, Option<Action>) {
        self.nodes = 0;
        self.max_at(board, 0)
    }

    /// Value and best action for O (the minimizer) at `board`
    pub fn min_value(&mut self, board: &Board) -> (i32, Option<Action>) {
        self.nodes = 0;
        self.min_at(board, 0)
    }

    /// Search for the player to move.
    ///
    /// Terminal boards return their utility and no action.
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn search(&mut self, board: &Board) -> SearchOutcome {
        self.nodes = 0;
        let (value, action) = match rules::player_to_move(board) {
            Turn::ToMove(Player::X) => self.max_at(board, 0),
            Turn::ToMove(Player::O) => self.min_at(board, 0),
            Turn::GameOver => {
                self.nodes = 1;
                (utility(board), None)
            }
        };
        debug!(value, action = ?action, nodes = self.nodes, "search complete");
        SearchOutcome {
            value,
            action,
            nodes: self.nodes,
        }
    }

    /// Minimax value of every legal action, in enumeration order.
    ///
    /// Empty on terminal boards.
    pub fn evaluate_actions(&mut self, board: &Board) -> Vec<(Action, i32)> {
        self.nodes = 0;
        let Some(player) = rules::player_to_move(board).player() else {
            return Vec::new();
        };

        let mut values = Vec::new();
        for (action, child) in rules::successors(board) {
            let (value, _) = match player {
                Player::X => self.min_at(&child, 1),
                Player::O => self.max_at(&child, 1),
            };
            values.push((action, value));
        }
        values
    }

    fn budget_exhausted(&self, depth: usize) -> bool {
        depth > 0 && self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn max_at(&mut self, board: &Board, depth: usize) -> (i32, Option<Action>) {
        self.nodes += 1;
        if rules::terminal(board) || self.budget_exhausted(depth) {
            return (utility(board), None);
        }

        let mut best_value = i32::MIN;
        let mut best_action = None;
        for (action, child) in rules::successors(board) {
            let (value, _) = self.min_at(&child, depth + 1);
            if value > best_value {
                best_value = value;
                best_action = Some(action);
            }
        }
        (best_value, best_action)
    }

    fn min_at(&mut self, board: &Board, depth: usize) -> (i32, Option<Action>) {
        self.nodes += 1;
        if rules::terminal(board) || self.budget_exhausted(depth) {
            return (utility(board), None);
        }

        let mut best_value = i32::MAX;
        let mut best_action = None;
        for (action, child) in rules::successors(board) {
            let (value, _) = self.max_at(&child, depth + 1);
            if value < best_value {
                best_value = value;
                best_action = Some(action);
            }
        }
        (best_value, best_action)
    }
}

/// Value and best action for X at `board`, searching to the end of the game
pub fn max_value(board: &Board) -> (i32, Option<Action>) {
    Minimax::default().max_value(board)
}

/// Value and best action for O at `board`, searching to the end of the game
pub fn min_value(board: &Board) -> (i32, Option<Action>) {
    Minimax::default().min_value(board)
}

/// Optimal action for the player to move, `None` once the game is over
pub fn best_move(board: &Board) -> Option<Action> {
    Minimax::default().search(board).action
}

/// Minimax value of every legal action at `board`
pub fn evaluate_actions(board: &Board) -> Vec<(Action, i32)> {
    Minimax::default().evaluate_actions(board)
}
