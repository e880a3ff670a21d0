//! Tests for the minimax solver.

use perfect_tictactoe::{
    Board, Move, Outcome, Player, actions, max_value, min_value, minimax, play_out, player,
    start_state, succ, terminal, utility, value,
};

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

#[test]
fn test_opening_move_exists() {
    let mv = minimax(&start_state());
    assert!(mv.is_some());
}

#[test]
fn test_empty_board_is_a_draw() {
    assert_eq!(value(&start_state()), 0);
    assert_eq!(max_value(&start_state()).0, 0);
}

#[test]
fn test_perfect_play_draws() {
    let game = play_out(&start_state()).unwrap();
    assert_eq!(*game.outcome(), Outcome::Draw);
    assert_eq!(game.moves().len(), 9);
    assert_eq!(game.boards().len(), 10);

    let last = game.final_board().unwrap();
    assert!(terminal(last));
    assert_eq!(utility(last), 0);
}

#[test]
fn test_play_out_boards_follow_moves() {
    let start = board("X../.../...");
    let game = play_out(&start).unwrap();
    assert_eq!(game.boards()[0], start);
    for (i, &mv) in game.moves().iter().enumerate() {
        let expected = succ(&game.boards()[i], mv).unwrap();
        assert_eq!(game.boards()[i + 1], expected);
    }
}

#[test]
fn test_returned_move_is_legal() {
    let boards = [
        start_state(),
        board("X../.../..."),
        board("X../.O./..X"),
        board("XOX/XOO/..."),
    ];
    for b in boards {
        let mv = minimax(&b).unwrap();
        assert!(actions(&b).contains(&mv), "{} is not legal on\n{}", mv, b);
    }
}

#[test]
fn test_minimax_none_on_terminal() {
    assert_eq!(minimax(&board("XXX/OO./...")), None);
    assert_eq!(minimax(&board("XOX/OXX/OXO")), None);
}

#[test]
fn test_fork_is_found() {
    // X . . / . O . / . . X  with O to move. O must take an edge; a corner
    // lets X fork.
    let b = board("X../.O./..X");
    assert_eq!(player(&b), Player::O);
    let mv = minimax(&b).unwrap();
    assert!(
        [Move::new(0, 1), Move::new(1, 0), Move::new(1, 2), Move::new(2, 1)]
            .contains(&Some(mv)),
        "O played corner {}",
        mv
    );
    assert_eq!(min_value(&b).0, 0);
}

#[test]
fn test_x_converts_forced_win() {
    // X O . / . . . / . . .  with X to move: O's edge reply to a corner
    // opening loses by force.
    let b = board("XO./.../...");
    assert_eq!(value(&b), 1);
    let game = play_out(&b).unwrap();
    assert_eq!(*game.outcome(), Outcome::Won(Player::X));
}

/// Walks every line of play where `perfect` follows minimax and the other
/// side tries every legal move, asserting `perfect` never loses.
fn assert_never_loses(b: Board, perfect: Player) {
    if terminal(&b) {
        assert_ne!(
            perfect_tictactoe::winner(&b),
            Some(perfect.opponent()),
            "{} lost on\n{}",
            perfect,
            b
        );
        return;
    }

    if player(&b) == perfect {
        let mv = minimax(&b).unwrap();
        assert_never_loses(succ(&b, mv).unwrap(), perfect);
    } else {
        for mv in actions(&b) {
            assert_never_loses(succ(&b, mv).unwrap(), perfect);
        }
    }
}

#[test]
fn test_x_never_loses_against_any_opponent() {
    assert_never_loses(start_state(), Player::X);
}

#[test]
fn test_o_never_loses_against_any_opponent() {
    assert_never_loses(start_state(), Player::O);
}
