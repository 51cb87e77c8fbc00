//! Error types for the audit engine.
//!
//! Only the full-page scorer's delegation path can fail at all, and even
//! that failure never reaches callers: it is logged and converted into the
//! local fallback computation. Extraction misses (absent or malformed tags)
//! are represented as zero-score report values, not errors.

use thiserror::Error;

/// Failures of the external scoring-service call.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Request could not be sent or the body could not be read
    #[error("scoring request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("scoring endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body had no numeric score under any known field name
    #[error("scoring response has no numeric score field")]
    MissingScore,
}

/// Result type alias using ScoringError.
pub type Result<T> = std::result::Result<T, ScoringError>;
