use crate::table::game_state::SessionState;

use super::Agent;

/// A replay agent that will replay a sequence of bets
/// from a vector. It consumes the vector making it fast but
/// hard to reuse or introspect what bets were placed.
///
/// Once the bets run out the agent stops playing.
#[derive(Debug, Clone)]
pub struct VecReplayAgent {
    bets: Vec<f64>,
    idx: usize,
    default: f64,
}

impl VecReplayAgent {
    pub fn new(bets: Vec<f64>) -> Self {
        Self {
            bets,
            idx: 0,
            default: 0.0,
        }
    }
}

/// A replay agent that will replay a sequence of bets from a slice.
#[derive(Debug, Clone)]
pub struct SliceReplayAgent<'a> {
    bets: &'a [f64],
    idx: usize,
    default: f64,
}

impl<'a> SliceReplayAgent<'a> {
    pub fn new(bets: &'a [f64]) -> Self {
        Self {
            bets,
            idx: 0,
            default: 0.0,
        }
    }
}

impl Agent for VecReplayAgent {
    fn bet(&mut self, _id: u128, _game_state: &SessionState) -> f64 {
        let idx = self.idx;
        self.idx += 1;
        self.bets.get(idx).copied().unwrap_or(self.default)
    }

    fn keep_playing(&mut self, _id: u128, _game_state: &SessionState) -> bool {
        self.idx < self.bets.len()
    }
}

impl<'a> Agent for SliceReplayAgent<'a> {
    fn bet(&mut self, _id: u128, _game_state: &SessionState) -> f64 {
        let idx = self.idx;
        self.idx += 1;
        self.bets.get(idx).copied().unwrap_or(self.default)
    }

    fn keep_playing(&mut self, _id: u128, _game_state: &SessionState) -> bool {
        self.idx < self.bets.len()
    }
}
