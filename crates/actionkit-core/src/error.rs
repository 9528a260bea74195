//! Error types for ActionKit.

use thiserror::Error;

/// Main error type for Action operations.
///
/// Every variant except `InvalidLayout` describes a caller-input problem. A
/// failed operation leaves the Action exactly as it was. `InvalidLayout` is
/// only produced by layout validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("F-Curve '{data_path}[{array_index}]' already exists in action '{action}'")]
    DuplicateChannel {
        data_path: String,
        array_index: u32,
        action: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid channel layout: {0}")]
    InvalidLayout(String),
}

impl ActionError {
    /// Whether this error reports a stale or foreign handle.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias for Action operations.
pub type Result<T> = std::result::Result<T, ActionError>;
