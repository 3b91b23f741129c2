//! ttt - exhaustive minimax solver for Tic-Tac-Toe
//!
//! Solve positions, run self-play series, or walk through the rules on a
//! sample board.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Exhaustive minimax solver for Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Emit debug-level search logs on stderr (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Solve(tictactoe_minimax::cli::commands::solve::SolveArgs),

    /// Play games between the optimal player and an opponent
    Play(tictactoe_minimax::cli::commands::play::PlayArgs),

    /// Show the rule queries for a sample or given position
    Demo(tictactoe_minimax::cli::commands::demo::DemoArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Commands::Solve(args) => tictactoe_minimax::cli::commands::solve::execute(args),
        Commands::Play(args) => tictactoe_minimax::cli::commands::play::execute(args),
        Commands::Demo(args) => tictactoe_minimax::cli::commands::demo::execute(args),
    }
}
