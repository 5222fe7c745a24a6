use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameStateError {
    #[error("The session is not in a phase where that is allowed")]
    InvalidPhaseTransition,
    #[error("The starting bankroll must be a positive amount")]
    BankrollNotPositive,
    #[error("The bet must be a positive amount")]
    BetNotPositive,
    #[error("The bet can't exceed the bankroll")]
    BetExceedsBankroll,
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("The shoe ran out of cards")]
    EmptyShoe,
    #[error("No outcome available for the round")]
    OutcomeUnavailable,
}

#[derive(Error, Debug)]
pub enum TableSessionError {
    #[error("Can't build a table session without a game state")]
    NeedGameState,
    #[error("Game state error: {0}")]
    GameState(#[from] GameStateError),
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}
