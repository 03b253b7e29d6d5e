//! Error types

use thiserror::Error;

/// Rejected rate-limit input. Shown inline on the field, never propagated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("rate must be a whole number between {min} and {max}")]
    OutOfRangeOrNonNumeric { min: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to write preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize preferences: {0}")]
    Json(#[from] serde_json::Error),
}
