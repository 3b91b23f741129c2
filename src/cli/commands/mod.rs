//! CLI subcommands

pub mod demo;
pub mod play;
pub mod solve;
