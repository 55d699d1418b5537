//! Core error type.

use thiserror::Error;

/// Errors produced by `vt-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vt-core`.
pub type CoreResult<T> = Result<T, CoreError>;
