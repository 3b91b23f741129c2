//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first fully marked line in scan order.
    ///
    /// Rows are scanned before columns and columns before diagonals. On a
    /// malformed board where both players own a line, the first match wins.
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<([usize; 3], Player)> {
        WINNING_LINES.iter().find_map(|&line| {
            let owner = cells[line[0]].to_player()?;
            line.iter()
                .all(|&idx| cells[idx] == cells[line[0]])
                .then_some((line, owner))
        })
    }

    /// All fully marked lines, in scan order
    pub fn complete_lines(cells: &[Cell; 9]) -> Vec<([usize; 3], Player)> {
        WINNING_LINES
            .iter()
            .filter_map(|&line| {
                let owner = cells[line[0]].to_player()?;
                line.iter()
                    .all(|&idx| cells[idx] == cells[line[0]])
                    .then_some((line, owner))
            })
            .collect()
    }

    /// Positions that would immediately complete a line for the player,
    /// ascending and without duplicates
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
