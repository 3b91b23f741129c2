//! Game-tree search over the rules in [`crate::tictactoe`]

pub mod evaluation;
pub mod minimax;
pub mod selfplay;

pub use evaluation::utility;
pub use minimax::{
    Minimax, SearchConfig, SearchOutcome, best_move, evaluate_actions, max_value, min_value,
};
pub use selfplay::{
    OptimalPolicy, Policy, RandomPolicy, SelfPlaySummary, play_game, play_series,
};
