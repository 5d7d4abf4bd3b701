//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `HpError` as one variant
//! via `#[from]` where they need it.

use thiserror::Error;

/// The base error type for `hp-core`.
#[derive(Debug, Error)]
pub enum HpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `hp-core`.
pub type HpResult<T> = Result<T, HpError>;
