//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuizError;

/// Errors emitted by `QuizApi` implementations.
///
/// `Display` is what the user sees after the operation prefix, so server
/// messages are passed through verbatim.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiError {
    #[error("{message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
    /// A success response whose body is not the expected JSON.
    #[error("invalid response from quiz backend: {0}")]
    Decode(reqwest::Error),
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    InvalidQuiz(#[from] QuizError),
}

impl QuizApiError {
    /// True when the backend answered with an explicit error message.
    #[must_use]
    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}
