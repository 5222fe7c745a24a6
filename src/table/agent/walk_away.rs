use crate::table::game_state::SessionState;

use super::Agent;

/// An agent that refuses to put up a bet at all. Useful as the
/// default agent and for testing session teardown.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkAwayAgent;

impl Agent for WalkAwayAgent {
    fn bet(&mut self, _id: u128, _game_state: &SessionState) -> f64 {
        0.0
    }

    fn keep_playing(&mut self, _id: u128, _game_state: &SessionState) -> bool {
        false
    }
}
