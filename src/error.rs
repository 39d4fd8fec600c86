//! Error types for the planmatter library.
//!
//! The surface is deliberately small: malformed front matter is never an
//! error (the codec degrades to "no front matter"), so only I/O and
//! payload-shape failures can surface here.

use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum PlanMatterError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Hook payload is not parseable structured data
    #[error("invalid hook payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PlanMatterError>;
