//! Core error type.
//!
//! Sub-crates define their own error enums for their I/O seams and convert
//! `CoreError` into them via `#[from]` where needed.

use thiserror::Error;

/// The base error type shared by the `fg-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fg-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
