// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the slrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
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

    #[error("content validation failed: {count} problem(s)")]
    ValidationFailed { count: usize },

    #[error("no content files given\n  hint: pass files as arguments or set content.files in spoilerline.toml")]
    NoContentFiles,

    #[error("cannot parse delta '{0}'\n  hint: use terms like '3 days' or '1 week 2 hours'")]
    UnparseableDelta(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for slrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<sl_core::Error> for Error {
    fn from(e: sl_core::Error) -> Self {
        match e {
            sl_core::Error::InvalidField { field, reason } => Error::InvalidField { field, reason },
            sl_core::Error::NotAllowed {
                field,
                value,
                allowed,
            } => Error::NotAllowed {
                field,
                value,
                allowed,
            },
            sl_core::Error::InvalidContent { count } => Error::InvalidContent { count },
            sl_core::Error::ContentLayout { path, reason } => Error::ContentLayout { path, reason },
            sl_core::Error::Io(e) => Error::Io(e),
            sl_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
