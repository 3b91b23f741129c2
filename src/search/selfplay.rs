//! Full games between move-selection policies

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::minimax::{Minimax, SearchConfig};
use crate::{
    Error, Result,
    tictactoe::{Action, Board, Game, GameOutcome, Player, rules},
};

/// Move selection for one side of a game
pub trait Policy {
    /// Choose an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board offers no legal action.
    fn select_action(&mut self, board: &Board) -> Result<Action>;

    fn name(&self) -> &str;
}

/// Plays the minimax-optimal action
pub struct OptimalPolicy {
    name: String,
    searcher: Minimax,
}

impl OptimalPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            searcher: Minimax::new(config),
        }
    }
}

impl Policy for OptimalPolicy {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        self.searcher
            .search(board)
            .action
            .ok_or_else(|| Error::NoLegalActions {
                board: board.encode(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Plays a uniformly random legal action
pub struct RandomPolicy {
    name: String,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a random policy with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, board: &Board) -> Result<Action> {
        rules::legal_actions(board)
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::NoLegalActions {
                board: board.encode(),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Play one game from the empty board, X moving first.
///
/// # Errors
///
/// Returns an error if a policy fails to choose or chooses an illegal action.
pub fn play_game(x: &mut dyn Policy, o: &mut dyn Policy) -> Result<Game> {
    let mut game = Game::new();
    while let Some(player) = rules::player_to_move(&game.current()).player() {
        let board = game.current();
        let action = match player {
            Player::X => x.select_action(&board)?,
            Player::O => o.select_action(&board)?,
        };
        game.play(action)?;
    }
    Ok(game)
}

/// Tally of finished games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SelfPlaySummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Games won by `player`
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Games lost by `player`
    pub fn losses(&self, player: Player) -> usize {
        self.wins(player.opponent())
    }
}

/// Play `games` games, reporting each finished game to `on_game`.
///
/// # Errors
///
/// Stops at the first game that fails (see [`play_game`]).
pub fn play_series(
    x: &mut dyn Policy,
    o: &mut dyn Policy,
    games: usize,
    mut on_game: impl FnMut(usize, &Game),
) -> Result<SelfPlaySummary> {
    let mut summary = SelfPlaySummary::default();
    for index in 0..games {
        let game = play_game(x, o)?;
        if let Some(outcome) = game.outcome() {
            summary.record(outcome);
        }
        on_game(index, &game);
    }
    debug!(
        x = x.name(),
        o = o.name(),
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "series complete"
    );
    Ok(summary)
}
