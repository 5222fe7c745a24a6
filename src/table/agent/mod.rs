//! `Agent`s are the automatic players in the table sessions. They are
//! the betting strategies behind figuring out expected bankroll.
//!
//! Some basic agents are provided as a way of testing baseline value.
mod counting;
mod flat;
mod replay;
mod walk_away;

use super::game_state::SessionState;

/// This is the trait that you need to implement in order to implement
/// different betting strategies. It's up to you to implement the logic
/// and state.
pub trait Agent {
    /// This is the method that will be called by the session to get
    /// the bet for the next round. A bet that isn't a positive amount
    /// ends the session instead.
    fn bet(&mut self, id: u128, game_state: &SessionState) -> f64;

    /// Called after each round to ask whether the agent wants another.
    /// The default is to keep going until the money runs out.
    fn keep_playing(&mut self, _id: u128, _game_state: &SessionState) -> bool {
        true
    }
}

pub use self::counting::CountingBetAgent;
pub use self::flat::FlatBetAgent;
pub use self::replay::{SliceReplayAgent, VecReplayAgent};
pub use self::walk_away::WalkAwayAgent;
