//! Minimax behaviour on known positions and in full games.

use perfect_tictactoe::{
    Board, Move, Player, Square, actions, current_player, evaluate, initial_state, max_value, min_value, minimax,
    result, terminal, utility, winner,
};

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);
const E: Square = Square::Empty;

fn board(text: &str) -> Board {
    text.parse().expect("valid board text")
}

#[test]
fn test_x_completes_row() {
    let b = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    assert_eq!(current_player(&b), Some(Player::X));
    assert_eq!(minimax(&b), Move::at(0, 2));
}

#[test]
fn test_o_completes_row() {
    let b = Board::from_rows([[X, X, E], [O, O, E], [X, E, E]]);
    assert_eq!(current_player(&b), Some(Player::O));
    assert_eq!(minimax(&b), Move::at(1, 2));
}

#[test]
fn test_o_must_take_centre_after_corner_opening() {
    let b = board("X../.../...");
    assert_eq!(minimax(&b), Move::at(1, 1));
    assert_eq!(evaluate(&b).value(), 0);
}

#[test]
fn test_o_must_answer_opposite_corners_on_an_edge() {
    let b = board("X../.O./..X");
    let mv = minimax(&b).expect("game not over");

    assert!(mv.row() == 1 || mv.col() == 1, "expected an edge, got {mv}");
    assert_eq!(max_value(&result(&b, mv)), 0);
}

#[test]
fn test_x_blocks_when_no_win_available() {
    // O threatens the middle row; X has no line to complete.
    let b = board("X../OO./..X");
    assert_eq!(current_player(&b), Some(Player::X));
    assert_eq!(minimax(&b), Move::at(1, 2));
    assert_eq!(evaluate(&b).value(), 0);
}

#[test]
fn test_full_board_without_line() {
    let b = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);

    assert!(terminal(&b));
    assert_eq!(winner(&b), None);
    assert_eq!(utility(&b), 0);
    assert_eq!(minimax(&b), None);
}

#[test]
fn test_terminal_board_returns_none() {
    assert_eq!(minimax(&board("XXX/OO./...")), None);
    assert_eq!(minimax(&board("XOX/XOO/OXX")), None);
}

#[test]
fn test_empty_board_value_is_draw() {
    let eval = evaluate(&initial_state());
    assert_eq!(eval.value(), 0);
    assert!(eval.best_move().is_some());
}

#[test]
fn test_self_play_ends_in_draw() {
    let mut b = initial_state();
    let mut moves = 0;

    while let Some(mv) = minimax(&b) {
        b = result(&b, mv);
        moves += 1;
    }

    assert!(terminal(&b));
    assert_eq!(moves, 9);
    assert_eq!(utility(&b), 0);
}

/// Plays `player` by minimax against every possible reply and returns the
/// worst utility (from `player`'s side) seen at any leaf.
fn worst_case(b: &Board, player: Player) -> i32 {
    if terminal(b) {
        return match player {
            Player::X => utility(b),
            Player::O => -utility(b),
        };
    }

    if current_player(b) == Some(player) {
        let mv = minimax(b).expect("non-terminal board has a move");
        worst_case(&result(b, mv), player)
    } else {
        actions(b)
            .into_iter()
            .map(|mv| worst_case(&result(b, mv), player))
            .min()
            .expect("non-terminal board has actions")
    }
}

#[test]
fn test_x_never_loses() {
    assert_eq!(worst_case(&initial_state(), Player::X), 0);
}

#[test]
fn test_o_never_loses() {
    assert_eq!(worst_case(&initial_state(), Player::O), 0);
}

#[test]
fn test_chosen_move_is_value_optimal() {
    for text in ["X../.../...", "XO./.../...", "X.O/.X./...", "XO./.X./..O"] {
        let b = board(text);
        let mv = minimax(&b).expect("game not over");

        match current_player(&b) {
            Some(Player::X) => assert_eq!(min_value(&result(&b, mv)), max_value(&b), "{text}"),
            Some(Player::O) => assert_eq!(max_value(&result(&b, mv)), min_value(&b), "{text}"),
            None => unreachable!("{text} is not terminal"),
        }
    }
}

#[test]
fn test_evaluation_serializes() {
    let eval = evaluate(&board("XX./OO./..."));
    let json = serde_json::to_value(eval).expect("serializable");

    assert_eq!(json["value"], 1);
    assert_eq!(json["best_move"]["position"], "TopRight");
}
