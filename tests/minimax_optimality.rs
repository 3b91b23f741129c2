//! Optimality checks for the minimax search

use tictactoe_minimax::{
    search::{Minimax, OptimalPolicy, best_move, evaluate_actions, max_value, min_value, play_game},
    tictactoe::{
        Action, Board, GameOutcome, Player, Turn, apply, initial_state, legal_actions,
        player_to_move, terminal, winner,
    },
    utility,
};

/// Walk every line of play where `optimal` follows `best_move` and the other
/// side tries every legal reply. Returns the number of finished games.
fn explore_against_all_replies(board: Board, optimal: Player, finished: &mut usize) {
    match player_to_move(&board) {
        Turn::GameOver => {
            *finished += 1;
            assert_ne!(
                winner(&board),
                Some(optimal.opponent()),
                "optimal {optimal} lost on {}",
                board.encode()
            );
        }
        Turn::ToMove(player) if player == optimal => {
            let action = best_move(&board).expect("non-terminal board has a move");
            explore_against_all_replies(apply(&board, action).unwrap(), optimal, finished);
        }
        Turn::ToMove(_) => {
            for action in legal_actions(&board) {
                explore_against_all_replies(apply(&board, action).unwrap(), optimal, finished);
            }
        }
    }
}

mod opening {
    use super::*;

    #[test]
    fn best_opening_is_corner_or_centre_and_draws() {
        let board = initial_state();
        let action = best_move(&board).expect("empty board has a move");

        let corner = (action.row == 0 || action.row == 2) && (action.col == 0 || action.col == 2);
        let centre = action == Action::new(1, 1);
        assert!(corner || centre, "unexpected opening {action}");

        let after = apply(&board, action).unwrap();
        let (value, reply) = min_value(&after);
        assert_eq!(value, 0, "optimal opening must keep the draw");
        assert!(reply.is_some());
    }

    #[test]
    fn game_value_is_a_draw() {
        assert_eq!(max_value(&initial_state()).0, 0);
        assert!(evaluate_actions(&initial_state()).iter().all(|&(_, v)| v == 0));
    }

    #[test]
    fn full_tree_node_count() {
        // Every game prefix from the empty board, the root included
        let outcome = Minimax::default().search(&initial_state());
        assert_eq!(outcome.nodes, 549_946);
    }
}

mod self_play {
    use super::*;

    #[test]
    fn repeated_best_moves_end_in_a_draw() {
        let mut board = initial_state();
        let mut plies = 0;
        while let Some(action) = best_move(&board) {
            board = apply(&board, action).unwrap();
            plies += 1;
        }
        assert!(terminal(&board));
        assert_eq!(plies, 9);
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn optimal_policies_draw() {
        let mut x = OptimalPolicy::new("x");
        let mut o = OptimalPolicy::new("o");
        let game = play_game(&mut x, &mut o).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn best_move_from_midgame_is_legal() {
        let board = Board::from_string("XX./.O./...").unwrap();
        let action = best_move(&board).unwrap();
        assert!(legal_actions(&board).contains(&action));
        // O must block the top row
        assert_eq!(action, Action::new(0, 2));
        let after = apply(&board, action).unwrap();
        assert_eq!(max_value(&after).0, 0);
    }
}

mod never_loses {
    use super::*;

    #[test]
    fn optimal_x_never_loses_to_any_o() {
        let mut finished = 0;
        explore_against_all_replies(initial_state(), Player::X, &mut finished);
        assert!(finished > 0);
    }

    #[test]
    fn optimal_o_never_loses_to_any_x() {
        let mut finished = 0;
        explore_against_all_replies(initial_state(), Player::O, &mut finished);
        assert!(finished > 0);
    }
}
