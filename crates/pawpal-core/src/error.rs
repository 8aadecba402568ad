// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the PawPal engine.

use thiserror::Error;

/// The primary error type used across all PawPal adapter traits and core operations.
#[derive(Debug, Error)]
pub enum PawpalError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Remote response backend errors (network, auth, malformed body).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A pet, memory, or other record was not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// Caller supplied input that cannot be acted on.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PawpalError {
    /// Shorthand for a [`PawpalError::Backend`] without an underlying source.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a [`PawpalError::NotFound`].
    pub fn not_found(kind: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            id: id.into(),
        }
    }
}

impl From<serde_json::Error> for PawpalError {
    fn from(e: serde_json::Error) -> Self {
        Self::Storage {
            source: Box::new(e),
        }
    }
}
