//! Error types for the engine and its configuration.

use crate::position::Position;
use crate::types::{Mark, Phase};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned by engine operations.
///
/// Every variant is recoverable. The operation that produced it left the
/// engine exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// An operation was invoked before `initialize`.
    #[display("Game has not been initialized")]
    Uninitialized,

    /// A move was submitted while the game is not accepting moves.
    #[display("Game is not being played (phase: {phase})")]
    NotPlaying {
        /// Phase at the time of the call.
        phase: Phase,
    },

    /// The target cell already holds a mark.
    #[display("Cell {position} is already occupied")]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },

    /// The submitted mark is not the one whose turn it is.
    #[display("It's {expected}'s turn, not {requested}'s")]
    WrongTurn {
        /// Mark expected to move.
        expected: Mark,
        /// Mark that was submitted.
        requested: Mark,
    },

    /// A coordinate or history index is outside its valid range.
    #[display("Index {index} out of range (valid: 0..{len})")]
    OutOfRange {
        /// Rejected index.
        index: usize,
        /// Exclusive upper bound at the time of the call.
        len: usize,
    },

    /// History review was requested but is disabled by configuration.
    #[display("History review is disabled")]
    HistoryDisabled,

    /// A postcondition failed on a candidate state; nothing was committed.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
