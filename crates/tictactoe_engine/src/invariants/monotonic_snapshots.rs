//! Monotonic snapshots invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::board::Board;
use crate::position::Position;
use crate::session::Session;

/// Invariant: consecutive snapshots differ by exactly one cell, which went
/// from empty to occupied. Cells are never overwritten or cleared.
pub struct MonotonicSnapshotsInvariant;

impl Invariant<Session> for MonotonicSnapshotsInvariant {
    fn holds(session: &Session) -> bool {
        let mut previous = Board::empty();
        for snapshot in session.history().snapshots() {
            let changed: Vec<Position> = Position::ALL
                .iter()
                .copied()
                .filter(|pos| previous.cell(*pos) != snapshot.cell(*pos))
                .collect();

            match changed.as_slice() {
                [pos] if previous.is_empty(*pos) => previous = *snapshot,
                _ => return false,
            }
        }
        true
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
