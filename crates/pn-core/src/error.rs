//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers the few
//! failures that originate in shared primitives (configuration and parcel
//! attribute validation).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("priority {0} is outside 1..=3")]
    InvalidPriority(u8),

    #[error("weight {0} kg must be finite and positive")]
    InvalidWeight(f64),
}

/// Shorthand result type for `pn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
