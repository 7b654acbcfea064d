//! Storage Errors
//!
//! Failures a collection operation can surface to its caller. Every variant is a
//! client error: nothing here is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Request body did not decode into the entity shape. Carries the decoder message.
    #[error("{0}")]
    MalformedInput(String),

    /// The `id` query parameter was missing or not a 64-bit integer.
    #[error("Invalid ID")]
    InvalidId(String),

    #[error("Entity not found")]
    NotFound,
}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            StoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
