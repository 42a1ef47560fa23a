use thiserror::Error;

/// Failure talking to the trivia service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Service answered with status {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Could not decode response: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid cell")]
    InvalidCell,
}

pub type Result<T, E = BoardError> = core::result::Result<T, E>;
