use std::{cell::RefCell, rc::Rc};

use crate::table::{action::Action, game_state::SessionState};

use super::{Historian, HistorianError};

/// One recorded action together with the state around it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    pub before_game_state: Option<SessionState>,
    pub action: Action,
    pub after_game_state: SessionState,
}

/// VecHistorian is a historian that will
/// append each action to a vector.
pub struct VecHistorian {
    previous: Option<SessionState>,
    records: Rc<RefCell<Vec<HistoryRecord>>>,
}

impl VecHistorian {
    /// Create a new storage for the historian
    /// that can be introspected later.
    pub fn new_storage() -> Rc<RefCell<Vec<HistoryRecord>>> {
        Rc::new(RefCell::new(vec![]))
    }

    /// Create a new VecHistorian with the provided storage
    /// `Rc<RefCell<Vec<HistoryRecord>>>`
    pub fn new(records: Rc<RefCell<Vec<HistoryRecord>>>) -> Self {
        Self {
            records,
            previous: None,
        }
    }
}

impl Historian for VecHistorian {
    fn record_action(
        &mut self,
        _id: u128,
        game_state: &SessionState,
        action: Action,
    ) -> Result<(), HistorianError> {
        let mut records = self.records.try_borrow_mut()?;

        // Now that we have the lock, we can record the action
        records.push(HistoryRecord {
            before_game_state: self.previous.clone(),
            action,
            after_game_state: game_state.clone(),
        });

        // Record the game state for the next action
        self.previous = Some(game_state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{
        Phase, SessionState, TableSessionBuilder,
        agent::VecReplayAgent,
        outcome::{RoundOutcome, VecReplayProvider},
        test_util::assert_bankroll_conserved,
    };

    use super::*;

    #[test]
    fn test_vec_historian() {
        let records = VecHistorian::new_storage();
        let hist = Box::new(VecHistorian::new(records.clone()));

        let game_state = SessionState::new(100.0);

        let mut sim = TableSessionBuilder::default()
            .game_state(game_state)
            .agent(Box::new(VecReplayAgent::new(vec![10.0, 10.0, 10.0])))
            .provider(Box::new(VecReplayProvider::new(vec![
                RoundOutcome::Win,
                RoundOutcome::Loss,
                RoundOutcome::Win,
            ])))
            .historians(vec![hist])
            .build()
            .unwrap();

        sim.run().unwrap();

        let records = records.borrow();
        // A start and a completion around three actions per round.
        assert!(records.len() > 10);

        // The before state of each record is the after state of the
        // one before it.
        for pair in records.windows(2) {
            let before = pair[1].before_game_state.as_ref().unwrap();
            assert_eq!(pair[0].after_game_state.phase, before.phase);
        }

        assert_eq!(
            Phase::Complete,
            records.last().unwrap().after_game_state.phase
        );

        assert_bankroll_conserved(&sim.game_state, &records);
    }
}
