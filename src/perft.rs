//! Game-tree leaf counting, for validating the rules engine.

use crate::board::{Board, Mark};
use crate::rules;

/// Count leaves of the game tree reachable within `depth` plies. A terminal
/// board is a single leaf even when depth remains: finished games are never
/// played on. From the empty board, `perft(.., Mark::X, 9)` counts every
/// distinct complete game: 255168.
pub fn perft(board: &Board, to_move: Mark, depth: u32) -> u64 {
    if rules::verdict(board).is_terminal() {
        return 1;
    }
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for idx in board.legal_moves() {
        let child = board.with_mark(idx, to_move);
        nodes += perft(&child, to_move.opponent(), depth - 1);
    }
    nodes
}
