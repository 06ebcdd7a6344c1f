//! History consistency invariant: one snapshot per occupied cell.

use super::Invariant;
use crate::session::Session;

/// Invariant: history length equals the number of occupied cells, and the
/// latest snapshot is the live board.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();
        if history.len() != session.board().occupied() {
            return false;
        }

        match history.latest() {
            Some(latest) => latest == session.board(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "History length matches occupied cells and ends at the live board"
    }
}
