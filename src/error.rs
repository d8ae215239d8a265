//! Murmur Error Types
//!
//! Two tiers matter to the caller: the speech engine is missing entirely, or
//! something went wrong after it was found.

use thiserror::Error;

/// Central error type for Murmur
#[derive(Error, Debug)]
pub enum SayError {
    #[error("speech engine not available: {0}")]
    EngineUnavailable(String),

    #[error("speech synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("nothing to say")]
    EmptyUtterance,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SayError {
    /// True when no engine could be acquired at all.
    pub fn is_missing_engine(&self) -> bool {
        matches!(self, SayError::EngineUnavailable(_))
    }
}

/// Result type alias for Murmur operations
pub type SayResult<T> = Result<T, SayError>;
