//! Solve command - minimax analysis of a single position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{
        format_action, format_number, print_board, print_kv, print_section, print_subsection,
    },
    search::{Minimax, SearchConfig, utility},
    tictactoe::{Action, Board, LineAnalyzer, Player, player_to_move, terminal, winner},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct SolveArgs {
    /// Board to solve, e.g. "X.O/.X./..." (defaults to the empty board)
    pub board: Option<String>,

    /// Search depth budget in plies (exact search when omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ActionValue {
    pub action: Action,
    pub value: i32,
}

/// Everything `solve` knows about a position
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub to_move: Option<Player>,
    pub terminal: bool,
    pub winner: Option<Player>,
    pub utility: i32,
    pub value: i32,
    pub best_move: Option<Action>,
    pub nodes: u64,
    pub actions: Vec<ActionValue>,
    pub threats: Vec<Action>,
}

/// Build the report for `board`
pub fn solve(board: &Board, config: SearchConfig) -> SolveReport {
    let mut searcher = Minimax::new(config);
    let actions = searcher
        .evaluate_actions(board)
        .into_iter()
        .map(|(action, value)| ActionValue { action, value })
        .collect();
    let outcome = searcher.search(board);

    let to_move = player_to_move(board).player();
    // Cells where the player waiting to move next would complete a line
    let threats: Vec<Action> = to_move
        .map(|player| {
            LineAnalyzer::winning_moves(board.cells(), player.opponent())
                .into_iter()
                .map(Action::from_index)
                .collect()
        })
        .unwrap_or_default();

    SolveReport {
        board: board.encode(),
        to_move,
        terminal: terminal(board),
        winner: winner(board),
        utility: utility(board),
        value: outcome.value,
        best_move: outcome.action,
        nodes: outcome.nodes,
        actions,
        threats,
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = match &args.board {
        Some(text) => Board::from_string(text)?,
        None => Board::new(),
    };
    let config = match args.max_depth {
        Some(depth) => SearchConfig::new().with_max_depth(depth),
        None => SearchConfig::new(),
    };

    let report = solve(&board, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Minimax analysis");
    print_board(&board);
    println!();

    match report.to_move {
        Some(player) => print_kv("Player to move", &player.to_string()),
        None => {
            let result = report
                .winner
                .map_or_else(|| "draw".to_string(), |p| format!("{p} wins"));
            print_kv("Game over", &result);
        }
    }
    print_kv("Value (X view)", &report.value.to_string());
    print_kv("Best move", &format_action(report.best_move));
    print_kv("Nodes searched", &format_number(report.nodes));
    if !report.threats.is_empty() {
        let threats: Vec<String> = report.threats.iter().map(ToString::to_string).collect();
        print_kv("Opponent threats", &threats.join(" "));
    }

    if !report.actions.is_empty() {
        print_subsection("Action values");
        for entry in &report.actions {
            let marker = if Some(entry.action) == report.best_move {
                "  <- best"
            } else {
                ""
            };
            println!("  {:8} {:>3}{marker}", entry.action.to_string(), entry.value);
        }
    }

    Ok(())
}
