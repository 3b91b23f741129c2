//! Test suite for the Tic-Tac-Toe rules
//! Validates reachability invariants and the rule queries

use std::collections::{HashSet, VecDeque};

use tictactoe_minimax::{
    ActionRejection, Error,
    search::utility,
    tictactoe::{
        Action, Board, Cell, LineAnalyzer, Player, Turn, apply, initial_state, legal_actions,
        player_to_move, terminal, winner,
    },
};

/// Every board reachable from the empty board under legal play
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    let root = initial_state();
    seen.insert(root);
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        for action in legal_actions(&board) {
            let next = apply(&board, action).expect("legal action must apply");
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

mod reachability {
    use super::*;

    #[test]
    fn reachable_position_count_matches_known_total() {
        // 5,478 distinct legal positions, terminal ones included
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn piece_counts_stay_within_one() {
        for board in reachable_boards() {
            let count = board.counts();
            assert!(
                count.x == count.o || count.x == count.o + 1,
                "unreachable counts X={} O={} on {}",
                count.x,
                count.o,
                board.encode()
            );
        }
    }

    #[test]
    fn player_to_move_alternates_along_every_edge() {
        for board in reachable_boards() {
            let Turn::ToMove(mover) = player_to_move(&board) else {
                assert!(legal_actions(&board).is_empty());
                continue;
            };
            for action in legal_actions(&board) {
                let next = apply(&board, action).unwrap();
                match player_to_move(&next) {
                    Turn::ToMove(following) => assert_eq!(
                        following,
                        mover.opponent(),
                        "turn did not alternate after {action} on {}",
                        board.encode()
                    ),
                    Turn::GameOver => assert!(terminal(&next)),
                }
            }
        }
    }

    #[test]
    fn no_reachable_board_has_two_winners() {
        for board in reachable_boards() {
            let lines = LineAnalyzer::complete_lines(board.cells());
            assert!(
                lines.iter().all(|&(_, owner)| Some(owner) == winner(&board)),
                "conflicting lines on {}",
                board.encode()
            );
        }
    }
}

mod apply_rules {
    use super::*;

    #[test]
    fn apply_never_mutates_input() {
        let board = Board::from_string("X.O/.X./...").unwrap();
        let snapshot = board;
        let next = apply(&board, Action::new(2, 2)).unwrap();

        assert_eq!(board, snapshot);
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
        assert_eq!(next.get(2, 2), Some(Cell::O));
        assert_eq!(player_to_move(&board), Turn::ToMove(Player::O));
    }

    #[test]
    fn apply_rejects_out_of_range_coordinates() {
        let board = initial_state();
        for (row, col) in [(-1, 0), (3, 0), (0, 3), (0, -1), (3, 3)] {
            let err = apply(&board, Action::new(row, col)).unwrap_err();
            assert!(
                matches!(
                    err,
                    Error::InvalidAction {
                        reason: ActionRejection::OutOfBounds,
                        ..
                    }
                ),
                "({row}, {col}) should be out of bounds, got {err}"
            );
        }
    }

    #[test]
    fn apply_rejects_every_occupied_cell() {
        let board = Board::from_string("XO./.X./O..").unwrap();
        for row in 0..3 {
            for col in 0..3 {
                if board.get(row, col) == Some(Cell::Empty) {
                    continue;
                }
                let err = apply(&board, Action::new(row, col)).unwrap_err();
                assert!(matches!(
                    err,
                    Error::InvalidAction {
                        reason: ActionRejection::Occupied,
                        ..
                    }
                ));
            }
        }
    }

    #[test]
    fn legal_actions_are_unique_and_empty() {
        let board = Board::from_string("XO./.X./O..").unwrap();
        let actions = legal_actions(&board);
        let unique: HashSet<_> = actions.iter().copied().collect();
        assert_eq!(unique.len(), actions.len());
        assert_eq!(actions.len(), 5);
        for action in actions {
            assert_eq!(board.get(action.row, action.col), Some(Cell::Empty));
        }
    }
}

mod winning_lines {
    use super::*;

    #[test]
    fn top_row_x() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn right_column_o() {
        let board = Board::from_string("XXO/X.O/..O").unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn main_diagonal_x() {
        let board = Board::from_string("XO./OX./..X").unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn anti_diagonal_o() {
        let board = Board::from_string("XXO/XO./O..").unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn every_line_is_detected() {
        for line in tictactoe_minimax::tictactoe::WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut rows = [[Cell::Empty; 3]; 3];
                for idx in line {
                    rows[idx / 3][idx % 3] = player.to_cell();
                }
                let board = Board::from_rows(rows);
                assert_eq!(winner(&board), Some(player), "line {line:?}");
                assert!(terminal(&board));
            }
        }
    }

    #[test]
    fn first_line_in_scan_order_wins_on_malformed_board() {
        let board = Board::from_string("XXX/.../OOO").unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        let board = Board::from_string("OOO/.../XXX").unwrap();
        assert_eq!(winner(&board), Some(Player::O));
        let board = Board::from_string("X.O/X.O/X.O").unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }
}

mod terminal_and_utility {
    use super::*;

    #[test]
    fn classic_draw_is_terminal() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert!(terminal(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);
        assert_eq!(player_to_move(&board), Turn::GameOver);
    }

    #[test]
    fn empty_board_is_not_terminal() {
        assert!(!terminal(&initial_state()));
    }

    #[test]
    fn utility_signs() {
        assert_eq!(utility(&Board::from_string("XXX/OO./...").unwrap()), 1);
        assert_eq!(utility(&Board::from_string("XX./OOO/X..").unwrap()), -1);
    }

    #[test]
    fn last_cell_completes_x_diagonal() {
        use Cell::{Empty as E, O, X};
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, E]]);
        assert_eq!(player_to_move(&board), Turn::ToMove(Player::X));
        assert_eq!(legal_actions(&board), vec![Action::new(2, 2)]);

        let finished = apply(&board, Action::new(2, 2)).unwrap();
        assert!(finished.is_full());
        assert_eq!(winner(&finished), Some(Player::X));
        assert_eq!(utility(&finished), 1);
    }
}
