//! Unified model error types.

use thiserror::Error;

/// Top-level model error.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid money amount '{input}': {reason}")]
    InvalidMoney { input: String, reason: String },
}
