//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The tree is small (at most 9! paths, cut down hard by pruning and the
//! shrinking branching factor), so the search always runs to terminal
//! positions; there is no depth limit and no heuristic evaluation.

use crate::board::{Board, Mark};
use crate::rules;
use crate::search::eval::{terminal_score, DRAW_SCORE};

/// Reply pinned on an empty board. Minimax would also settle on a score-0
/// move there; answering with the center skips the largest tree and fixes
/// which of the optimal openings gets played.
pub const OPENING_MOVE: usize = 4;

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    /// Chosen cell; `None` only when the board has no empty cell.
    pub best: Option<usize>,
    /// Minimax score of the chosen cell for the searching side.
    pub score: i32,
    /// Nodes visited, pruning included.
    pub nodes: u64,
}

#[derive(Default, Debug)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the game-theoretically optimal cell for `side`.
    ///
    /// Root moves are scored in ascending index order with a fresh full
    /// window each, and compared with strict `>`, so the lowest-indexed
    /// move wins ties. Calling this on a terminal board is the caller's
    /// mistake; it still returns a legal move if one is open.
    pub fn choose_move(&mut self, board: &Board, side: Mark) -> SearchResult {
        self.nodes = 0;
        let moves = board.legal_moves();
        if moves.is_empty() {
            let score = terminal_score(rules::verdict(board), side, 0).unwrap_or(DRAW_SCORE);
            return SearchResult { best: None, score, nodes: 0 };
        }
        if board.is_empty() {
            return SearchResult { best: Some(OPENING_MOVE), score: DRAW_SCORE, nodes: 0 };
        }

        let mut best = moves[0];
        let mut best_score = i32::MIN;
        for idx in moves {
            let child = board.with_mark(idx, side);
            let score = self.minimax(&child, side, side.opponent(), 0, i32::MIN, i32::MAX);
            log::debug!("root move {idx} scores {score}");
            if score > best_score {
                best_score = score;
                best = idx;
            }
        }
        SearchResult { best: Some(best), score: best_score, nodes: self.nodes }
    }

    /// Depth-first minimax over `board` with `to_move` to play. `depth` is
    /// the ply count below the root's children; alpha and beta travel by
    /// value down the stack.
    fn minimax(
        &mut self,
        board: &Board,
        maximizer: Mark,
        to_move: Mark,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if let Some(score) = terminal_score(rules::verdict(board), maximizer, depth) {
            return score;
        }

        if to_move == maximizer {
            let mut best = i32::MIN;
            for idx in board.legal_moves() {
                let child = board.with_mark(idx, to_move);
                let score =
                    self.minimax(&child, maximizer, to_move.opponent(), depth + 1, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for idx in board.legal_moves() {
                let child = board.with_mark(idx, to_move);
                let score =
                    self.minimax(&child, maximizer, to_move.opponent(), depth + 1, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
