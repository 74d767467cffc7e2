use tacbot::board::{Board, Mark};
use tacbot::perft::perft;

#[test]
fn perft_empty_board_small_depths() {
    let b = Board::new();
    assert_eq!(perft(&b, Mark::X, 0), 1);
    assert_eq!(perft(&b, Mark::X, 1), 9);
    assert_eq!(perft(&b, Mark::X, 2), 72);
    assert_eq!(perft(&b, Mark::X, 3), 504);
    assert_eq!(perft(&b, Mark::X, 4), 3024);
    // No game can end before ply 5, so these are pure permutations.
    assert_eq!(perft(&b, Mark::X, 5), 15120);
}

#[test]
fn perft_full_depth_counts_every_complete_game() {
    let b = Board::new();
    assert_eq!(perft(&b, Mark::X, 9), 255168);
}

#[test]
fn terminal_board_is_a_single_leaf() {
    let b: Board = "XXX OO. ...".parse().unwrap();
    assert_eq!(perft(&b, Mark::O, 4), 1, "finished games are never played on");
}
