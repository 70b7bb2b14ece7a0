//! Global application error types and handlers.
//!
//! This module defines custom error types that are used across the entire
//! client support layer and provides mechanisms for consistent error
//! handling and reporting.

use thiserror::Error;

/// Generic client error that can be used across all modules.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Request error: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
