//! Shared primitives for all Rust crates in Maildeck.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Maildeck crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant, reported at configuration time.
    #[error("validation error: {0}")]
    Validation(String),

    /// The persistent store rejected or failed an operation.
    #[error("store error: {0}")]
    Store(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
