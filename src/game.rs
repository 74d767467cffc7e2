//! Per-game state machine: the authoritative board snapshot and turn
//! indicator the presentation layer drives.

use thiserror::Error;

use crate::board::{Board, InvalidMove, Mark};
use crate::rules::{self, Verdict};

/// Lifecycle of a single game. `Won` and `Drawn` absorb every move attempt
/// until [`Game::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won { mark: Mark, line: [usize; 3] },
    Drawn,
}

impl GameState {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Won { .. } | GameState::Drawn)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Invalid(#[from] InvalidMove),
    #[error("game is already over")]
    Finished,
}

/// One game session. Holds no engine state; every move runs through the same
/// validate-then-verdict path whether a human or the search chose it.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    first: Mark,
    state: GameState,
}

impl Game {
    pub fn new(first: Mark) -> Self {
        Self { board: Board::new(), to_move: first, first, state: GameState::NotStarted }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Apply a move for the side to move and recompute the verdict. The turn
    /// flips only while the game continues, so the winner stays the side
    /// that just moved.
    pub fn play(&mut self, idx: usize) -> Result<GameState, PlayError> {
        if self.state.is_over() {
            return Err(PlayError::Finished);
        }
        self.board = self.board.apply_move(idx, self.to_move)?;
        self.state = match rules::verdict(&self.board) {
            Verdict::Win { mark, line } => GameState::Won { mark, line },
            Verdict::Draw => GameState::Drawn,
            Verdict::InProgress => {
                self.to_move = self.to_move.opponent();
                GameState::InProgress
            }
        };
        Ok(self.state)
    }

    /// Back to a fresh board and the original first mover, from any state.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = self.first;
        self.state = GameState::NotStarted;
    }
}
