use std::cell::RefCell;
use std::rc::Rc;

use crate::core::HiLoCount;
use crate::table::game_state::SessionState;

use super::Agent;

/// An agent that sizes its bets off a shared Hi-Lo count.
///
/// The count is kept in an `Rc<RefCell<_>>` so a
/// `CountingHistorian` on the same session can feed it the
/// dealt cards while this agent reads it.
#[derive(Debug, Clone)]
pub struct CountingBetAgent {
    count: Rc<RefCell<HiLoCount>>,
    base_unit: f64,
}

impl CountingBetAgent {
    pub fn new(count: Rc<RefCell<HiLoCount>>, base_unit: f64) -> Self {
        Self { count, base_unit }
    }
}

impl Agent for CountingBetAgent {
    fn bet(&mut self, _id: u128, game_state: &SessionState) -> f64 {
        let units = self.count.borrow().suggested_units();
        (self.base_unit * f64::from(units)).min(game_state.bankroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;

    #[test]
    fn test_bet_tracks_the_count() {
        let count = Rc::new(RefCell::new(HiLoCount::new(2)));
        let mut agent = CountingBetAgent::new(count.clone(), 10.0);
        let state = SessionState::new(1_000.0);

        // A fresh count bets one unit.
        assert_eq!(10.0, agent.bet(0, &state));

        // A shoe full of low cards pushes the bet up.
        let lows = Hand::new_from_str("2s3c4h5d6s2c3h4d").unwrap();
        count.borrow_mut().observe_all(lows.iter());
        assert_eq!(80.0, agent.bet(0, &state));
    }

    #[test]
    fn test_bet_capped_by_bankroll() {
        let count = Rc::new(RefCell::new(HiLoCount::new(6)));
        let mut agent = CountingBetAgent::new(count, 10.0);
        let state = SessionState::new(4.0);

        assert_eq!(4.0, agent.bet(0, &state));
    }
}
