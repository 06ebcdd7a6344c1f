//! Read-only render snapshot handed to the UI layer.

use crate::board::Board;
use crate::history::History;
use crate::session::Session;
use crate::types::{Mark, Phase};
use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;

/// What the UI should announce.
///
/// Combines the authoritative phase with the review side-mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Status {
    /// No game started.
    #[display("Not started")]
    Uninitialized,
    /// Moves are being accepted.
    #[display("Playing")]
    InProgress,
    /// Finished with a winner.
    #[display("{_0} wins!")]
    Won(Mark),
    /// Finished without a winner.
    #[display("It's a draw!")]
    Drawn,
    /// Showing a past snapshot (0-based index).
    #[display("Viewing history at move {}", _0 + 1)]
    ReviewingHistory(usize),
}

/// Everything needed to render the game after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct PublicState {
    /// Board to render: the reviewed snapshot, otherwise the live board.
    board: Board,
    /// Authoritative phase. Unchanged by review.
    phase: Phase,
    /// Mark whose turn it is, while in progress.
    to_move: Option<Mark>,
    /// Snapshot index under review, if any.
    review_index: Option<usize>,
    /// Number of recorded snapshots.
    history_len: usize,
    /// Whether a step back is currently available.
    can_step_back: bool,
    /// Whether a step forward is currently available.
    can_step_forward: bool,
}

impl PublicState {
    pub(crate) fn capture(session: &Session, history_review: bool) -> Self {
        let history: &History = session.history();
        let phase = session.phase();
        Self {
            board: history.viewed().copied().unwrap_or(*session.board()),
            phase,
            to_move: session.to_move().filter(|_| phase == Phase::InProgress),
            review_index: history.review_index(),
            history_len: history.len(),
            can_step_back: history_review && history.can_step_back(),
            can_step_forward: history_review && history.can_step_forward(),
        }
    }

    /// Checks if a past snapshot is being shown.
    pub fn is_reviewing(&self) -> bool {
        self.review_index.is_some()
    }

    /// Status to announce.
    pub fn status(&self) -> Status {
        if let Some(at) = self.review_index {
            return Status::ReviewingHistory(at);
        }
        match self.phase {
            Phase::Uninitialized => Status::Uninitialized,
            Phase::InProgress => Status::InProgress,
            Phase::Won(mark) => Status::Won(mark),
            Phase::Drawn => Status::Drawn,
        }
    }

    /// Status line text.
    pub fn message(&self) -> String {
        self.status().to_string()
    }

    /// Serializes the state as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
