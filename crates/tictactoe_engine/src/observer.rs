//! State-change notifications for the rendering layer.

use crate::state::PublicState;

/// Receives the new state after every successful mutating operation.
///
/// Observers are called after the engine has committed, so they always see
/// a complete state. Any closure taking `&PublicState` is an observer.
pub trait StateObserver {
    /// Called once per committed operation.
    fn on_state_change(&mut self, state: &PublicState);
}

impl<F> StateObserver for F
where
    F: FnMut(&PublicState),
{
    fn on_state_change(&mut self, state: &PublicState) {
        self(state)
    }
}
