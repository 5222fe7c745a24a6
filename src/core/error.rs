use thiserror::Error;

/// This is the core error type for the
/// RS-Blackjack library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Hash)]
pub enum RSBlackjackError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
}
