//! Error types for promptlab.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("account not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("contract violation: {0}")]
    Contract(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
