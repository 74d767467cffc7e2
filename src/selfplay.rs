//! Scripted games between move policies, used to validate the engine and to
//! dump game records.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::rules::{self, Verdict};
use crate::search::alphabeta::Searcher;

/// How a side picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Full alpha-beta search each turn.
    Optimal,
    /// Uniform choice among the empty cells.
    Random,
}

#[derive(Debug, Clone)]
pub struct SelfPlayParams {
    pub games: usize,
    pub seed: u64,
    pub x_policy: Policy,
    pub o_policy: Policy,
}

/// One finished game: the move sequence from the empty board (X first) and
/// its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    /// 1 X win, 0 draw, -1 O win.
    pub result: i8,
}

/// Play out the requested number of games. Deterministic for a given seed;
/// all-optimal matchups repeat the same game.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for _ in 0..params.games {
        games.push(play_one(params, &mut rng));
    }
    log::debug!("generated {} games (seed {})", games.len(), params.seed);
    games
}

fn play_one(params: &SelfPlayParams, rng: &mut SmallRng) -> GameRecord {
    let mut board = Board::new();
    let mut to_move = Mark::X;
    let mut record = GameRecord { moves: Vec::new(), result: 0 };
    loop {
        match rules::verdict(&board) {
            Verdict::Win { mark, .. } => {
                record.result = if mark == Mark::X { 1 } else { -1 };
                break;
            }
            Verdict::Draw => break,
            Verdict::InProgress => {}
        }
        let policy = match to_move {
            Mark::X => params.x_policy,
            Mark::O => params.o_policy,
        };
        let chosen = match policy {
            Policy::Optimal => Searcher::new().choose_move(&board, to_move).best,
            Policy::Random => random_move(&board, rng),
        };
        if let Some(idx) = chosen {
            record.moves.push(idx);
            board = board.with_mark(idx, to_move);
            to_move = to_move.opponent();
        } else {
            break;
        }
    }
    record
}

/// Uniform choice among the empty cells; `None` on a full board.
pub fn random_move(board: &Board, rng: &mut SmallRng) -> Option<usize> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}
