//! Demo command - walk through every rule on a sample position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{format_actions, print_board, print_kv, print_section},
    search::utility,
    tictactoe::{Board, Turn, legal_actions, player_to_move, terminal, winner},
};

/// Column-of-O position used when no board is supplied
pub const SAMPLE_BOARD: &str = "OOX/OX./OOX";

#[derive(Parser, Debug)]
#[command(about = "Show winner, turn, legal actions and utility for a position")]
pub struct DemoArgs {
    /// Board to inspect, e.g. "XOX/OXO/OX." (defaults to a sample position)
    pub board: Option<String>,
}

pub fn execute(args: DemoArgs) -> Result<()> {
    run(args.board.as_deref())
}

/// Print the rule queries for `board`, or for [`SAMPLE_BOARD`] when `None`
pub fn run(board: Option<&str>) -> Result<()> {
    let text = board.unwrap_or(SAMPLE_BOARD);
    let board = Board::from_string(text)?;

    print_section("Rules demo");
    print_board(&board);
    println!();

    let winner = winner(&board).map_or_else(|| "none".to_string(), |p| p.to_string());
    let turn = match player_to_move(&board) {
        Turn::ToMove(player) => player.to_string(),
        Turn::GameOver => "game is over".to_string(),
    };

    print_kv("Winner", &winner);
    print_kv("Terminal", &terminal(&board).to_string());
    print_kv("Player to move", &turn);
    print_kv("Legal actions", &format_actions(&legal_actions(&board)));
    print_kv("Utility", &utility(&board).to_string());

    Ok(())
}
