//! Command-line interface for the solver
//!
//! Subcommands solve single positions, run self-play series and demonstrate
//! the rule queries on a sample board.

pub mod commands;
pub mod config;
pub mod output;
