//! Board snapshot history with a review cursor.
//!
//! Snapshots are appended once per committed move; `snapshots[i]` is the
//! board right after move `i + 1`. The empty starting board is not stored.
//!
//! The cursor is either [`Cursor::Live`], following the authoritative
//! board, or [`Cursor::Reviewing`], pointing at a past snapshot. Moving
//! the cursor never touches the snapshots themselves.

use crate::board::Board;
use crate::error::EngineError;
use serde::Serialize;
use tracing::{debug, instrument};

/// Where the history is being viewed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cursor {
    /// Tracking the live board.
    #[default]
    Live,
    /// Showing the snapshot at this index.
    Reviewing(usize),
}

/// Append-only snapshot log plus cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
    cursor: Cursor,
}

impl History {
    /// Creates an empty history in live mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Checks if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// Most recent snapshot.
    pub fn latest(&self) -> Option<&Board> {
        self.snapshots.last()
    }

    /// Current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Index under review, if reviewing.
    pub fn review_index(&self) -> Option<usize> {
        match self.cursor {
            Cursor::Live => None,
            Cursor::Reviewing(at) => Some(at),
        }
    }

    /// Checks if the cursor is reviewing a past snapshot.
    pub fn is_reviewing(&self) -> bool {
        matches!(self.cursor, Cursor::Reviewing(_))
    }

    /// Snapshot under the cursor, if reviewing.
    pub fn viewed(&self) -> Option<&Board> {
        self.review_index().and_then(|at| self.get(at))
    }

    /// Appends a snapshot. The board is copied; later changes to the
    /// caller's board never reach the stored snapshot.
    #[instrument(skip(self, board), fields(len = self.snapshots.len()))]
    pub fn record(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Switches to review at the latest snapshot.
    ///
    /// Already reviewing: keeps the current index.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if nothing has been recorded yet.
    #[instrument(skip(self))]
    pub fn enter_review(&mut self) -> Result<usize, EngineError> {
        if let Cursor::Reviewing(at) = self.cursor {
            return Ok(at);
        }
        let last = self.last_index()?;
        self.cursor = Cursor::Reviewing(last);
        debug!(at = last, "Entered history review");
        Ok(last)
    }

    /// Moves the review cursor by `delta`, clamped to the recorded range.
    ///
    /// From live mode this first enters review at the latest snapshot.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if nothing has been recorded yet.
    #[instrument(skip(self))]
    pub fn step(&mut self, delta: isize) -> Result<usize, EngineError> {
        let last = self.last_index()?;
        let from = self.review_index().unwrap_or(last);
        let to = (from as isize)
            .saturating_add(delta)
            .clamp(0, last as isize) as usize;
        self.cursor = Cursor::Reviewing(to);
        debug!(from, to, "Stepped history");
        Ok(to)
    }

    /// Points the review cursor at `index`.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if `index` is not a recorded snapshot.
    /// The cursor is left unchanged.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> Result<usize, EngineError> {
        if index >= self.snapshots.len() {
            return Err(EngineError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = Cursor::Reviewing(index);
        Ok(index)
    }

    /// Returns to live mode. Returns true if review was active.
    pub fn resume_live(&mut self) -> bool {
        let was_reviewing = self.is_reviewing();
        self.cursor = Cursor::Live;
        was_reviewing
    }

    /// Drops every snapshot and returns to live mode.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = Cursor::Live;
    }

    /// Checks if stepping back would move the cursor.
    ///
    /// In live mode, stepping back enters review, so it is available as
    /// soon as one snapshot exists.
    pub fn can_step_back(&self) -> bool {
        match self.cursor {
            Cursor::Live => !self.is_empty(),
            Cursor::Reviewing(at) => at > 0,
        }
    }

    /// Checks if stepping forward would move the cursor.
    pub fn can_step_forward(&self) -> bool {
        match self.cursor {
            Cursor::Live => false,
            Cursor::Reviewing(at) => at + 1 < self.snapshots.len(),
        }
    }

    fn last_index(&self) -> Result<usize, EngineError> {
        self.snapshots
            .len()
            .checked_sub(1)
            .ok_or(EngineError::OutOfRange { index: 0, len: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Cell, Mark};

    fn history_of(moves: usize) -> History {
        let mut history = History::new();
        let mut board = Board::empty();
        for (i, pos) in Position::ALL.iter().take(moves).enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board = board.with_cell(*pos, Cell::Occupied(mark));
            history.record(board);
        }
        history
    }

    #[test]
    fn test_enter_review_requires_snapshot() {
        let mut history = History::new();
        assert_eq!(
            history.enter_review(),
            Err(EngineError::OutOfRange { index: 0, len: 0 })
        );
        assert_eq!(history.cursor(), Cursor::Live);
    }

    #[test]
    fn test_enter_review_starts_at_latest() {
        let mut history = history_of(3);
        assert_eq!(history.enter_review(), Ok(2));
        assert_eq!(history.viewed(), history.latest());
    }

    #[test]
    fn test_enter_review_is_idempotent() {
        let mut history = history_of(3);
        history.jump(0).expect("in range");
        assert_eq!(history.enter_review(), Ok(0));
    }

    #[test]
    fn test_step_clamps_at_both_ends() {
        let mut history = history_of(3);
        history.jump(0).expect("in range");
        assert_eq!(history.step(-1), Ok(0));
        assert_eq!(history.step(-1), Ok(0));
        assert!(!history.can_step_back());

        history.jump(2).expect("in range");
        assert_eq!(history.step(1), Ok(2));
        assert_eq!(history.step(isize::MAX), Ok(2));
        assert!(!history.can_step_forward());
    }

    #[test]
    fn test_step_from_live_enters_review() {
        let mut history = history_of(4);
        assert_eq!(history.step(-1), Ok(2));
        assert!(history.is_reviewing());
    }

    #[test]
    fn test_jump_out_of_range_keeps_cursor() {
        let mut history = history_of(2);
        history.jump(1).expect("in range");
        assert_eq!(
            history.jump(2),
            Err(EngineError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(history.cursor(), Cursor::Reviewing(1));
    }

    #[test]
    fn test_snapshots_are_independent_copies() {
        let history = history_of(3);
        assert_eq!(history.get(0).map(Board::occupied), Some(1));
        assert_eq!(history.get(1).map(Board::occupied), Some(2));
        assert_eq!(history.get(2).map(Board::occupied), Some(3));
    }

    #[test]
    fn test_navigation_availability() {
        let mut history = history_of(2);
        assert!(history.can_step_back());
        assert!(!history.can_step_forward());

        history.jump(0).expect("in range");
        assert!(!history.can_step_back());
        assert!(history.can_step_forward());

        assert!(history.resume_live());
        assert!(!history.resume_live());
    }

    #[test]
    fn test_clear() {
        let mut history = history_of(3);
        history.enter_review().expect("recorded");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), Cursor::Live);
    }
}
