//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Common configuration shared across commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
            verbose: false,
        }
    }
}

/// Who the optimal player faces in `play`
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Another minimax player
    Optimal,
    /// Uniformly random legal moves
    Random,
}

/// Self-play configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    #[serde(flatten)]
    pub common: CommonConfig,

    /// Number of games
    pub games: usize,

    /// Opponent type
    pub opponent: OpponentKind,

    /// Side played by the optimal player against a random opponent
    pub optimal_player: Player,

    /// Search depth budget, unlimited when absent
    pub max_depth: Option<usize>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            common: CommonConfig::default(),
            games: 100,
            opponent: OpponentKind::Random,
            optimal_player: Player::X,
            max_depth: None,
        }
    }
}

impl PlayConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON for
    /// this type.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        let config: PlayConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).map_err(|source| crate::Error::Io {
            operation: format!("write config '{}'", path.display()),
            source,
        })
    }

    fn validate(&self) -> crate::Result<()> {
        if self.games == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "games must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse a player token (`x` or `o`, any case)
pub fn parse_player_token(token: &str) -> Result<Player, String> {
    match token.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(format!("invalid player '{other}' (expected 'x' or 'o')")),
    }
}
