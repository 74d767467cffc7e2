use tacbot::board::{Board, Mark};
use tacbot::rules::{self, Verdict};
use tacbot::search::alphabeta::Searcher;

/// Walk every opponent line of play, letting the engine answer each of its
/// own turns. Panics if any reachable terminal is a win for the opponent.
/// Also checks the turn-alternation invariant on every board the engine
/// actually sees.
fn never_loses(board: &Board, to_move: Mark, engine: Mark) {
    let diff = board.count(Mark::X) as i32 - board.count(Mark::O) as i32;
    assert!(
        diff == 0 || diff == 1,
        "unbalanced board reached: {diff:+} extra X marks"
    );

    match rules::verdict(board) {
        Verdict::Win { mark, .. } => {
            assert_ne!(mark, engine.opponent(), "engine lost:\n{board}");
            return;
        }
        Verdict::Draw => return,
        Verdict::InProgress => {}
    }

    if to_move == engine {
        let r = Searcher::new().choose_move(board, engine);
        let idx = r.best.expect("non-terminal board has moves");
        let child = board.apply_move(idx, engine).unwrap();
        never_loses(&child, engine.opponent(), engine);
    } else {
        for idx in board.legal_moves() {
            let child = board.apply_move(idx, to_move).unwrap();
            never_loses(&child, to_move.opponent(), engine);
        }
    }
}

#[test]
fn engine_moving_first_never_loses() {
    never_loses(&Board::new(), Mark::X, Mark::X);
}

#[test]
fn engine_moving_second_never_loses() {
    never_loses(&Board::new(), Mark::X, Mark::O);
}

#[test]
fn optimal_versus_optimal_is_a_draw() {
    let mut board = Board::new();
    let mut to_move = Mark::X;
    loop {
        match rules::verdict(&board) {
            Verdict::Win { mark, .. } => panic!("{mark} won an all-optimal game:\n{board}"),
            Verdict::Draw => break,
            Verdict::InProgress => {}
        }
        let r = Searcher::new().choose_move(&board, to_move);
        board = board.apply_move(r.best.expect("moves available"), to_move).unwrap();
        to_move = to_move.opponent();
    }
}
