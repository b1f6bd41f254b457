//! Error types for store operations.

use thiserror::Error;

/// Errors raised by name lookups on a store.
///
/// All other store paths are total: given a registered name, commits,
/// dispatches and getter reads cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No mutation is registered under the given name.
    #[error("Unknown mutation '{name}'")]
    UnknownMutation { name: String },

    /// No action is registered under the given name.
    #[error("Unknown action '{name}'")]
    UnknownAction { name: String },

    /// No getter is registered under the given name.
    #[error("Unknown getter '{name}'")]
    UnknownGetter { name: String },
}

impl StoreError {
    /// Short kind string for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::UnknownMutation { .. } => "unknown_mutation",
            StoreError::UnknownAction { .. } => "unknown_action",
            StoreError::UnknownGetter { .. } => "unknown_getter",
        }
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            StoreError::UnknownMutation { name }
            | StoreError::UnknownAction { name }
            | StoreError::UnknownGetter { name } => name,
        }
    }
}
