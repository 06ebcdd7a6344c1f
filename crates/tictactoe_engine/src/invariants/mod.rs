//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every committed
//! transition. The engine checks them against each candidate session in
//! debug builds and refuses to commit a candidate that violates one.

use crate::session::Session;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_snapshots;
pub mod phase_matches_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_snapshots::MonotonicSnapshotsInvariant;
pub use phase_matches_board::PhaseMatchesBoardInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    MonotonicSnapshotsInvariant,
    PhaseMatchesBoardInvariant,
);

/// Checks every session invariant, joining violations into one message.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn check_session(session: &Session) -> Result<(), String> {
    SessionInvariants::check_all(session).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}
