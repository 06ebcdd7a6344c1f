//! Authoritative game state owned by the engine.
//!
//! A `Session` is only ever replaced wholesale: the engine clones it,
//! mutates the clone, checks invariants, then swaps it in.

use crate::board::Board;
use crate::history::History;
use crate::position::Position;
use crate::rules::detect_outcome;
use crate::types::{Cell, Mark, Phase};
use tracing::{debug, info};

/// Board, phase, turn and history of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) starting_mark: Option<Mark>,
    pub(crate) to_move: Option<Mark>,
    pub(crate) history: History,
}

impl Session {
    /// A fresh game in progress with `starting_mark` to move.
    pub fn started(starting_mark: Mark) -> Self {
        Self {
            board: Board::empty(),
            phase: Phase::InProgress,
            starting_mark: Some(starting_mark),
            to_move: Some(starting_mark),
            history: History::new(),
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mark that opened this game.
    pub fn starting_mark(&self) -> Option<Mark> {
        self.starting_mark
    }

    /// Mark whose turn is next, once started.
    pub fn to_move(&self) -> Option<Mark> {
        self.to_move
    }

    /// Snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Places `mark` at `position` without validation, records the
    /// snapshot, advances the turn and recomputes the phase.
    pub(crate) fn place(&mut self, position: Position, mark: Mark) {
        self.board = self.board.with_cell(position, Cell::Occupied(mark));
        self.history.record(self.board);
        self.to_move = Some(mark.opponent());

        if let Some(outcome) = detect_outcome(&self.board) {
            self.phase = outcome.into();
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            debug!(%position, %mark, "Move placed");
        }
    }
}
