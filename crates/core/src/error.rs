// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sl-core operations.

use thiserror::Error;

/// All possible errors that can occur in sl-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("invalid {field}: '{value}'\n  hint: valid values are: {allowed}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("invalid content: {count} problem(s) found\n  hint: run 'spoilerline validate' for the full listing")]
    InvalidContent { count: usize },

    #[error("unexpected content layout in {path}: {reason}")]
    ContentLayout { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The filter field an error is attributed to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidField { field, .. } | Error::NotAllowed { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// A specialized Result type for sl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
