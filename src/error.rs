//! Error types for the persistence adapter.
//!
//! The decision engine itself is infallible by contract: every entry point
//! either fully applies its rule or leaves state untouched.  Errors only
//! arise at the storage boundary, when a file-backed state store cannot
//! load or flush its snapshot.

use thiserror::Error;

/// Failures loading or flushing persisted panel state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("stored panel state is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Crate-wide `Result` alias for adapter operations.
pub type Result<T> = std::result::Result<T, StoreError>;
