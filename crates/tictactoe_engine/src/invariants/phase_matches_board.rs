//! Phase invariant: the stored phase agrees with the live board.

use super::Invariant;
use crate::rules::{check_winner, is_draw};
use crate::session::Session;
use crate::types::Phase;

/// Invariant: the phase is exactly what the board implies.
pub struct PhaseMatchesBoardInvariant;

impl Invariant<Session> for PhaseMatchesBoardInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        match session.phase() {
            Phase::Uninitialized => board.occupied() == 0,
            Phase::InProgress => check_winner(board).is_none() && !board.is_full(),
            Phase::Won(mark) => check_winner(board) == Some(mark),
            Phase::Drawn => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Phase agrees with the live board"
    }
}
