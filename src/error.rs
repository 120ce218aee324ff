use thiserror::Error;

/// Errors surfaced by game construction and the interactive front end.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PigError {
    #[error("invalid player type '{0}': expected 'human' or 'computer'")]
    InvalidPlayerType(String),
    #[error("invalid seat {0}: expected 0 or 1")]
    InvalidSeat(u8),
    #[error("invalid time limit: {0}")]
    InvalidTimeLimit(String),
    #[error("invalid decision '{0}': expected 'r' to roll or 'h' to hold")]
    InvalidDecision(String),
    #[error("prompt failed: {0}")]
    Prompt(String),
}
