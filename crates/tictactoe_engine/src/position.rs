//! Validated board coordinates.

use crate::error::EngineError;
use serde::Serialize;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A position on the board, addressed by row and column (each 0-2).
///
/// A `Position` can only be built from in-range coordinates, so every
/// board access through it is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, rejecting coordinates outside 0-2.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= SIZE {
            return Err(EngineError::OutOfRange {
                index: row,
                len: SIZE,
            });
        }
        if col >= SIZE {
            return Err(EngineError::OutOfRange {
                index: col,
                len: SIZE,
            });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Creates a position from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
