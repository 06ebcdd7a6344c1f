//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A move submitted by the caller: a mark placed at a row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
    /// The mark being placed.
    pub mark: Mark,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.row, self.col)
    }
}

/// Authoritative game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started.
    #[default]
    #[display("not initialized")]
    Uninitialized,
    /// Moves are being accepted.
    #[display("in progress")]
    InProgress,
    /// A mark completed a line.
    #[display("won by {_0}")]
    Won(Mark),
    /// The board filled with no winner.
    #[display("drawn")]
    Drawn,
}

impl Phase {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn)
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Phase::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Outcome of a board evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark has three in a row.
    #[display("{_0} wins")]
    Winner(Mark),
    /// The board is full with no winner.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl From<Outcome> for Phase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(mark) => Phase::Won(mark),
            Outcome::Draw => Phase::Drawn,
        }
    }
}
