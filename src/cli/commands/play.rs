//! Play command - run self-play games with the optimal player

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::{OpponentKind, PlayConfig, parse_player_token},
        output::{create_games_progress, format_actions, print_kv, print_section},
    },
    search::{OptimalPolicy, Policy, RandomPolicy, SearchConfig, SelfPlaySummary, play_series},
    tictactoe::{Game, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play games between the optimal player and an opponent")]
pub struct PlayArgs {
    /// JSON config file; flags given here override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Opponent for the optimal player
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Side the optimal player takes against a random opponent (`x` or `o`)
    #[arg(long, value_parser = parse_player_token)]
    pub optimal_player: Option<Player>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search depth budget in plies
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print every game's moves
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl PlayArgs {
    /// Resolve the effective configuration: file (or defaults), then flags
    pub fn resolve(&self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)?,
            None => PlayConfig::default(),
        };
        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(opponent) = self.opponent {
            config.opponent = opponent;
        }
        if let Some(player) = self.optimal_player {
            config.optimal_player = player;
        }
        if self.seed.is_some() {
            config.common.seed = self.seed;
        }
        if self.max_depth.is_some() {
            config.max_depth = self.max_depth;
        }
        if self.no_progress {
            config.common.progress = false;
        }
        if self.verbose {
            config.common.verbose = true;
        }
        if config.games == 0 {
            bail!("--games must be at least 1");
        }
        Ok(config)
    }
}

fn build_policies(config: &PlayConfig) -> (Box<dyn Policy>, Box<dyn Policy>) {
    let search = match config.max_depth {
        Some(depth) => SearchConfig::new().with_max_depth(depth),
        None => SearchConfig::new(),
    };

    match config.opponent {
        OpponentKind::Optimal => {
            let x: Box<dyn Policy> = Box::new(OptimalPolicy::with_config("Optimal X", search));
            let o: Box<dyn Policy> = Box::new(OptimalPolicy::with_config("Optimal O", search));
            (x, o)
        }
        OpponentKind::Random => {
            let random: Box<dyn Policy> = match config.common.seed {
                Some(seed) => Box::new(RandomPolicy::with_seed("Random", seed)),
                None => Box::new(RandomPolicy::new("Random")),
            };
            let optimal: Box<dyn Policy> = Box::new(OptimalPolicy::with_config("Optimal", search));
            match config.optimal_player {
                Player::X => (optimal, random),
                Player::O => (random, optimal),
            }
        }
    }
}

/// Run the configured series and return its tally
pub fn run(config: &PlayConfig) -> Result<SelfPlaySummary> {
    let (mut x, mut o) = build_policies(config);

    let progress = if config.common.progress {
        Some(create_games_progress(config.games as u64)?)
    } else {
        None
    };

    let summary = play_series(x.as_mut(), o.as_mut(), config.games, |index, game: &Game| {
        if config.common.verbose {
            let actions: Vec<_> = game.moves().iter().map(|m| m.action).collect();
            let message = format!(
                "game {}: {} -> {:?}",
                index + 1,
                format_actions(&actions),
                game.outcome()
            );
            match &progress {
                Some(pb) => pb.println(message),
                None => println!("{message}"),
            }
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }
    Ok(summary)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve()?;
    let summary = run(&config)?;

    print_section("Self-play results");
    let opponent = match config.opponent {
        OpponentKind::Optimal => "optimal",
        OpponentKind::Random => "random",
    };
    print_kv("Opponent", opponent);
    print_kv("Games", &summary.games.to_string());
    print_kv("X wins", &summary.x_wins.to_string());
    print_kv("O wins", &summary.o_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());

    // Only an exact search is guaranteed never to lose
    if config.max_depth.is_none() {
        match config.opponent {
            OpponentKind::Optimal if summary.draws != summary.games => {
                bail!("optimal self-play produced a decisive game");
            }
            OpponentKind::Random if summary.losses(config.optimal_player) > 0 => {
                bail!(
                    "optimal player ({}) lost {} game(s) to a random opponent",
                    config.optimal_player,
                    summary.losses(config.optimal_player)
                );
            }
            _ => {}
        }
    }

    Ok(())
}
