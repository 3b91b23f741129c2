//! Error types for the solver crate

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action was rejected by [`apply`](crate::tictactoe::rules::apply)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionRejection {
    /// Row or column outside `0..=2`
    OutOfBounds,
    /// The target cell already holds a mark
    Occupied,
    /// The board is already won or full, so nobody is to move
    GameOver,
}

impl fmt::Display for ActionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ActionRejection::OutOfBounds => "is out of bounds (row and column must be 0-2)",
            ActionRejection::Occupied => "is already occupied",
            ActionRejection::GameOver => "cannot be played because the game is over",
        };
        f.write_str(text)
    }
}

/// Main error type for the solver crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action ({row}, {col}): cell {reason}")]
    InvalidAction {
        row: i32,
        col: i32,
        reason: ActionRejection,
    },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("no legal actions available on board '{board}'")]
    NoLegalActions { board: String },

    #[error("inconsistent game record: {message}")]
    InconsistentGame { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
