//! Model-level errors.

use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A path segment or string that is not a decimal user id
    #[error("invalid user id '{0}': expected a non-negative integer")]
    InvalidUserId(String),
}
