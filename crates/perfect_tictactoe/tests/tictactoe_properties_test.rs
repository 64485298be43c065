//! Rule properties checked over every board reachable from the empty board.

use perfect_tictactoe::{
    Board, Outcome, Player, Position, Square, actions, current_player, initial_state, outcome, result,
    terminal, utility, validate, winner,
};
use std::collections::HashSet;

/// All distinct boards reachable by legal play, including terminal ones.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for mv in actions(&board) {
            stack.push(result(&board, mv));
        }
    }

    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of legal tic-tac-toe positions.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_every_reachable_board_validates() {
    for board in reachable_boards() {
        assert_eq!(validate(&board), Ok(()), "\n{board}");
    }
}

#[test]
fn test_terminal_iff_winner_or_no_actions() {
    for board in reachable_boards() {
        let expected = winner(&board).is_some() || actions(&board).is_empty();
        assert_eq!(terminal(&board), expected, "\n{board}");
    }
}

#[test]
fn test_action_count_matches_empty_cells() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        assert_eq!(actions(&board).len(), 9 - board.occupied_count(), "\n{board}");
    }
}

#[test]
fn test_result_fills_exactly_one_cell() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let player = current_player(&board).expect("non-terminal board has a player");

        for mv in actions(&board) {
            let next = result(&board, mv);
            assert_eq!(next.occupied_count(), board.occupied_count() + 1);

            for pos in Position::ALL {
                if pos == mv.position() {
                    assert_eq!(board.get(pos), Square::Empty);
                    assert_eq!(next.get(pos), Square::Occupied(player));
                } else {
                    assert_eq!(next.get(pos), board.get(pos), "{pos} changed\n{board}");
                }
            }
        }
    }
}

#[test]
fn test_turns_alternate() {
    for board in reachable_boards().into_iter().filter(|b| !terminal(b)) {
        let player = current_player(&board).expect("non-terminal board has a player");

        for mv in actions(&board) {
            let next = result(&board, mv);
            match current_player(&next) {
                Some(next_player) => assert_eq!(next_player, player.opponent()),
                None => assert!(terminal(&next)),
            }
        }
    }
}

#[test]
fn test_utility_tracks_winner() {
    for board in reachable_boards() {
        let u = utility(&board);
        assert!([-1, 0, 1].contains(&u));

        match winner(&board) {
            Some(Player::X) => assert_eq!(u, 1),
            Some(Player::O) => assert_eq!(u, -1),
            None => assert_eq!(u, 0),
        }
    }
}

#[test]
fn test_outcome_agrees_with_rules() {
    for board in reachable_boards() {
        let expected = match (winner(&board), terminal(&board)) {
            (Some(Player::X), _) => Outcome::XWins,
            (Some(Player::O), _) => Outcome::OWins,
            (None, true) => Outcome::Draw,
            (None, false) => Outcome::NotOver,
        };
        assert_eq!(outcome(&board), expected, "\n{board}");
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();

    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
    assert_eq!(current_player(&board), None);
}

#[test]
fn test_result_leaves_parent_untouched() {
    let parent: Board = "XX./OO./...".parse().unwrap();
    let snapshot = parent;

    let children: Vec<Board> = actions(&parent).into_iter().map(|mv| result(&parent, mv)).collect();

    assert_eq!(parent, snapshot);
    assert_eq!(children.len(), 5);
    assert!(children.iter().all(|child| child.occupied_count() == 5));
}
