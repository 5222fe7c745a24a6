use super::{action::Action, game_state::SessionState};

/// HistorianError is the error type for historian implementations.
#[derive(Error, Debug)]
pub enum HistorianError {
    #[error("Unable to record action")]
    UnableToRecordAction,
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Borrow Mut Error: {0}")]
    BorrowMutError(#[from] std::cell::BorrowMutError),
    #[error("Borrow Error: {0}")]
    BorrowError(#[from] std::cell::BorrowError),
}

/// Historians are a way for the session to record or notify of
/// actions while the game is progressing. This is useful for
/// logging, debugging, or even for implementing a replay system.
/// It's also how the card counting state stays in sync with
/// what the dealer has shown.
pub trait Historian {
    /// This method is called by the session when an action is received.
    ///
    /// # Arguments
    /// - `id` - The id of the session that the action was received on.
    /// - `game_state` - The game state after the action was played
    /// - `action` - The action that was played
    ///
    /// # Returns
    /// - `Ok(())` if the action was recorded successfully
    /// - `Err(HistorianError)` if there was an error recording the action.
    ///
    /// Returning an error will cause the historian to be dropped from the
    /// `TableSession`.
    fn record_action(
        &mut self,
        id: u128,
        game_state: &SessionState,
        action: Action,
    ) -> Result<(), HistorianError>;
}

mod counting;
mod failing;
mod fn_historian;
mod null;
mod vec;

pub use counting::CountingHistorian;
pub use failing::FailingHistorian;
pub use fn_historian::FnHistorian;
pub use null::NullHistorian;
use thiserror::Error;
pub use vec::{HistoryRecord, VecHistorian};
