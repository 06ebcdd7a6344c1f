//! 3x3 board model.

use crate::error::EngineError;
use crate::position::{Position, SIZE};
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// `Board` is a plain value: copying it yields an independent grid, and
/// every "setter" returns a new board instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    /// Gets the cell at the given row and column.
    #[instrument(skip(self))]
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Position::new(row, col).map(|pos| self.cell(pos))
    }

    /// Returns a copy of this board with the cell at row and column replaced.
    #[instrument(skip(self))]
    pub fn set(&self, row: usize, col: usize, cell: Cell) -> Result<Board, EngineError> {
        Position::new(row, col).map(|pos| self.with_cell(pos, cell))
    }

    /// Gets the cell at a validated position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns a copy of this board with one cell replaced.
    pub fn with_cell(&self, pos: Position, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[pos.index()] = cell;
        next
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Counts cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Counts non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Iterates over the three rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIZE)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so a player can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => (row * SIZE + col + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
