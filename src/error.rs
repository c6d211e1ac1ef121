//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Invariant violation: {0}")]
    Invariant(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    /// Whether this error was signaled by (or while reaching) a remote AI
    /// provider, as opposed to a local failure like JSON parsing.
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Error::AiProvider(_) | Error::Http(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
