use crate::table::game_state::SessionState;

use super::Agent;

/// An agent that bets the same amount every round, capped at
/// whatever bankroll is left.
#[derive(Debug, Clone, Copy)]
pub struct FlatBetAgent {
    bet: f64,
    rounds: Option<u32>,
}

impl FlatBetAgent {
    pub fn new(bet: f64) -> Self {
        Self { bet, rounds: None }
    }

    /// Stop after `rounds` rounds instead of playing until bust.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }
}

impl Default for FlatBetAgent {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Agent for FlatBetAgent {
    fn bet(&mut self, _id: u128, game_state: &SessionState) -> f64 {
        self.bet.min(game_state.bankroll)
    }

    fn keep_playing(&mut self, _id: u128, game_state: &SessionState) -> bool {
        match self.rounds {
            Some(rounds) => game_state.stats.hands_played < rounds,
            None => true,
        }
    }
}
