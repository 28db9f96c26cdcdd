use super::Outcome;
use thiserror::Error;

/// Error type for invalid secret words
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters, got {0:?}")]
    InvalidCharacters(String),
}

/// Contract violations raised by the round engine
///
/// These never happen during normal play; they mean the caller kept driving a
/// round the state machine had already closed.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("Round already ended ({0}), start a new round")]
    RoundOver(Outcome),
    #[error("No hidden letters left to reveal in a round still in progress")]
    NoHiddenLetters,
}
