use std::{cell::RefCell, rc::Rc};

use crate::core::HiLoCount;
use crate::table::{action::Action, game_state::SessionState};

use super::{Historian, HistorianError};

/// A historian that keeps a Hi-Lo count in step with the table.
///
/// Every card the dealer exposes is counted and the count is
/// cleared whenever the shoe is reshuffled. Share the count with
/// a `CountingBetAgent` to bet the count.
pub struct CountingHistorian {
    count: Rc<RefCell<HiLoCount>>,
}

impl CountingHistorian {
    pub fn new(count: Rc<RefCell<HiLoCount>>) -> Self {
        Self { count }
    }
}

impl Historian for CountingHistorian {
    fn record_action(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
        action: Action,
    ) -> Result<(), HistorianError> {
        match action {
            Action::ShoeShuffled => {
                self.count.try_borrow_mut()?.reset();
            }
            Action::RoundDealt(round) => {
                let mut count = self.count.try_borrow_mut()?;
                count.observe_all(round.player.iter());
                count.observe_all(round.dealer.iter());
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hand;
    use crate::table::dealer::DealtRound;

    fn dealt(player: &str, dealer: &str, shoe_shuffled: bool) -> Action {
        Action::RoundDealt(DealtRound {
            player: Hand::new_from_str(player).unwrap(),
            dealer: Hand::new_from_str(dealer).unwrap(),
            shoe_shuffled,
        })
    }

    #[test]
    fn test_counts_every_exposed_card() {
        let count = Rc::new(RefCell::new(HiLoCount::new(6)));
        let mut historian = CountingHistorian::new(count.clone());
        let state = SessionState::new(100.0);

        historian
            .record_action(0, &state, dealt("2s3c", "KhTd", false))
            .unwrap();

        assert_eq!(0, count.borrow().running_count());
        assert_eq!(4, count.borrow().cards_seen());
    }

    #[test]
    fn test_reshuffle_resets() {
        let count = Rc::new(RefCell::new(HiLoCount::new(6)));
        let mut historian = CountingHistorian::new(count.clone());
        let state = SessionState::new(100.0);

        historian
            .record_action(0, &state, dealt("2s3c", "4h5d", false))
            .unwrap();
        assert_eq!(4, count.borrow().running_count());

        historian
            .record_action(0, &state, Action::ShoeShuffled)
            .unwrap();
        assert_eq!(0, count.borrow().running_count());
        assert_eq!(0, count.borrow().cards_seen());
    }

    #[test]
    fn test_money_actions_are_ignored() {
        let count = Rc::new(RefCell::new(HiLoCount::new(6)));
        let mut historian = CountingHistorian::new(count.clone());
        let state = SessionState::new(100.0);

        historian
            .record_action(0, &state, Action::BetPlaced(10.0))
            .unwrap();
        assert_eq!(0, count.borrow().cards_seen());
    }
}
