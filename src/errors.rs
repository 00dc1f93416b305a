//! Typed errors for commit log operations

use thiserror::Error;

/// Result type for commit log operations
pub type Result<T> = std::result::Result<T, CommitLogError>;

/// Errors raised by [`crate::CommitLog`]
///
/// Every failure is a validation failure detected before any state changes;
/// there is no I/O, so there are no transient error kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitLogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
