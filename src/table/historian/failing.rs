use crate::table::{Historian, SessionState};

/// A historian that will always fail to record an action
/// and will return an error.
///
/// This historian is useful for testing the behavior of the session
pub struct FailingHistorian;

impl Historian for FailingHistorian {
    fn record_action(
        &mut self,
        _id: u128,
        _game_state: &SessionState,
        _action: crate::table::action::Action,
    ) -> Result<(), crate::table::historian::HistorianError> {
        Err(crate::table::historian::HistorianError::UnableToRecordAction)
    }
}
