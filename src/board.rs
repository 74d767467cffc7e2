//! Board representation: a 3x3 grid of cells, row-major from the top left.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Rejected move attempt. Callers recover by re-prompting or ignoring;
/// nothing here is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("cell index {0} is out of range (0-8)")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    Occupied(usize),
}

/// Board state. `Copy`, so a snapshot never aliases across turns; applying a
/// move yields a new value and leaves the input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [None; CELLS] }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<Mark> {
        self.cells[idx]
    }

    #[inline]
    pub fn is_cell_empty(&self, idx: usize) -> bool {
        self.cells[idx].is_none()
    }

    /// True before any mark has been placed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// True when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Empty cells in ascending index order. Empty when the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// Place `mark` on an empty cell and return the resulting board.
    ///
    /// Fails on an out-of-range index or an occupied cell. Turn order and
    /// terminal state are not re-checked here; callers go through
    /// [`crate::rules::verdict`] first.
    pub fn apply_move(&self, idx: usize, mark: Mark) -> Result<Board, InvalidMove> {
        if idx >= CELLS {
            return Err(InvalidMove::OutOfRange(idx));
        }
        if self.cells[idx].is_some() {
            return Err(InvalidMove::Occupied(idx));
        }
        Ok(self.with_mark(idx, mark))
    }

    /// Copy with `mark` written at `idx`, no occupancy check. Search and
    /// simulation internals only; game moves go through `apply_move`.
    #[inline]
    pub(crate) fn with_mark(&self, idx: usize, mark: Mark) -> Board {
        debug_assert!(self.cells[idx].is_none(), "cell {idx} already occupied");
        let mut next = *self;
        next.cells[idx] = Some(mark);
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let sym = match self.cells[row * 3 + col] {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{sym}")?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parse nine cells of `X`/`O`/`.` (whitespace ignored), row-major.
    fn from_str(s: &str) -> Result<Self, String> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELLS {
            return Err(format!("expected {CELLS} cells, got {}", chars.len()));
        }
        let mut cells = [None; CELLS];
        for (i, ch) in chars.iter().enumerate() {
            cells[i] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' => None,
                _ => return Err(format!("bad cell '{ch}' at index {i}")),
            };
        }
        Ok(Board { cells })
    }
}
