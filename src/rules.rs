//! Win and draw detection over a board snapshot.

use crate::board::{Board, Mark};

/// The 8 winning lines: 3 rows, then 3 columns, then 2 diagonals. Scan order
/// is fixed; when more than one line completes, the first one here is the one
/// reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Terminal classification of a board. A full board with a completed line is
/// a win, not a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    InProgress,
    Win { mark: Mark, line: [usize; 3] },
    Draw,
}

impl Verdict {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Verdict::InProgress)
    }
}

/// Scan the fixed lines for three equal non-empty cells; the winning line is
/// reported for highlighting. Draw only once the board is full.
pub fn verdict(board: &Board) -> Verdict {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Verdict::Win { mark, line };
            }
        }
    }
    if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
