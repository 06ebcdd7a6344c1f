//! Move preconditions.
//!
//! Validation is split from mutation: a caller may check a move without
//! committing it, and the engine only mutates after these checks pass.

use crate::board::Board;
use crate::error::EngineError;
use crate::position::Position;
use crate::types::{Mark, Phase};
use tracing::instrument;

/// Precondition: the game must be accepting moves.
pub struct GameIsPlaying;

impl GameIsPlaying {
    /// Fails with [`EngineError::NotPlaying`] unless the phase is in progress.
    pub fn check(phase: Phase) -> Result<(), EngineError> {
        if phase == Phase::InProgress {
            Ok(())
        } else {
            Err(EngineError::NotPlaying { phase })
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`EngineError::CellOccupied`] if the cell holds a mark.
    pub fn check(board: &Board, position: Position) -> Result<(), EngineError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(EngineError::CellOccupied { position })
        }
    }
}

/// Precondition: it must be the submitted mark's turn.
pub struct MarksTurn;

impl MarksTurn {
    /// Fails with [`EngineError::WrongTurn`] if the marks differ.
    pub fn check(current: Mark, requested: Mark) -> Result<(), EngineError> {
        if current == requested {
            Ok(())
        } else {
            Err(EngineError::WrongTurn {
                expected: current,
                requested,
            })
        }
    }
}

/// Composite precondition: phase, then occupancy, then turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(
        phase: Phase,
        board: &Board,
        position: Position,
        current: Mark,
        requested: Mark,
    ) -> Result<(), EngineError> {
        GameIsPlaying::check(phase)?;
        CellIsEmpty::check(board, position)?;
        MarksTurn::check(current, requested)?;
        Ok(())
    }
}

/// Checks whether `requested` may play at `position`. Pure; no side effects.
#[instrument(skip(board))]
pub fn validate_move(
    phase: Phase,
    board: &Board,
    position: Position,
    current: Mark,
    requested: Mark,
) -> Result<(), EngineError> {
    LegalMove::check(phase, board, position, current, requested)
}
