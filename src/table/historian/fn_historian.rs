use crate::table::{action::Action, game_state::SessionState};

use super::{Historian, HistorianError};

/// This `Historian` is an implementation that forwards every
/// action to a function. This is useful for testing and debugging.
#[derive(Debug, Clone)]
pub struct FnHistorian<F> {
    func: F,
}

impl<F: Fn(u128, &SessionState, Action) -> Result<(), HistorianError>> FnHistorian<F> {
    /// Create a new `FnHistorian` with the provided function
    /// that will be called when an action is received on a session.
    pub fn new(f: F) -> Self {
        Self { func: f }
    }
}

impl<F: Fn(u128, &SessionState, Action) -> Result<(), HistorianError>> Historian
    for FnHistorian<F>
{
    fn record_action(
        &mut self,
        id: u128,
        game_state: &SessionState,
        action: Action,
    ) -> Result<(), HistorianError> {
        // Call the function with the action that was received
        (self.func)(id, game_state, action)
    }
}
