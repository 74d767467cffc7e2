//! Terminal scoring for the adversarial search.

use crate::board::Mark;
use crate::rules::Verdict;

/// Score of a win found at the root's immediate children (depth 0).
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

/// Score a verdict from the maximizer's point of view, `depth` plies below
/// the root's children: wins decay with depth so faster wins rank higher,
/// losses gain with depth so forced losses are delayed. `None` while the
/// game is still open.
#[inline]
pub fn terminal_score(verdict: Verdict, maximizer: Mark, depth: i32) -> Option<i32> {
    match verdict {
        Verdict::Win { mark, .. } if mark == maximizer => Some(WIN_SCORE - depth),
        Verdict::Win { .. } => Some(depth - WIN_SCORE),
        Verdict::Draw => Some(DRAW_SCORE),
        Verdict::InProgress => None,
    }
}
