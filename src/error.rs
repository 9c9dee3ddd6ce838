//! # Error Types
//!
//! Parameter validation never fails; errors only come from the output
//! sink and from parsing print jobs.

use thiserror::Error;

/// Main error type for encoder operations
#[derive(Debug, Error)]
pub enum EncoderError {
    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A print job could not be parsed
    #[error("Invalid job: {0}")]
    Job(#[from] serde_json::Error),
}
