//! Alternating turn invariant: marks alternate from the starting mark.

use super::Invariant;
use crate::session::Session;
use crate::types::Mark;

/// Invariant: marks alternate, starting from the session's starting mark.
///
/// The starting mark has been played as often as its opponent or exactly
/// once more, and the mark to move follows from the move count.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let Some(start) = session.starting_mark() else {
            return session.board().occupied() == 0 && session.to_move().is_none();
        };

        let board = session.board();
        let started = board.count(start);
        let other = board.count(start.opponent());
        if started != other && started != other + 1 {
            return false;
        }

        let expected_next: Mark = if session.history().len() % 2 == 0 {
            start
        } else {
            start.opponent()
        };
        session.to_move() == Some(expected_next)
    }

    fn description() -> &'static str {
        "Marks alternate from the starting mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::test_support::played;

    #[test]
    fn test_alternation_from_o() {
        let session = played(Mark::O, &[0, 1, 2, 3]);
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.to_move(), Some(Mark::O));
    }

    #[test]
    fn test_wrong_to_move_violates() {
        let mut session = played(Mark::X, &[0]);
        session.to_move = Some(Mark::X);
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
