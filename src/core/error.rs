//! Errors raised by state machine operations.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, FsmError>;

/// Errors that can occur while driving a state machine.
///
/// Every variant is returned before any mutation takes place, so a failed
/// call leaves the machine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// `change_state` was given a name that is not a configured state.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// `trigger` was given an event the current state has no transition for.
    #[error("Unknown event '{event}' for state '{state}'")]
    UnknownEvent { event: String, state: String },

    /// The current state has no definition, so its transitions cannot be read.
    ///
    /// Only reachable when the configured initial state is not itself
    /// listed among the states.
    #[error("State '{state}' has no definition")]
    UndefinedState { state: String },

    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FsmError {
    pub fn is_unknown_state(&self) -> bool {
        matches!(self, Self::UnknownState { .. })
    }

    pub fn is_unknown_event(&self) -> bool {
        matches!(self, Self::UnknownEvent { .. })
    }
}

impl From<serde_json::Error> for FsmError {
    fn from(err: serde_json::Error) -> Self {
        FsmError::InvalidConfig(err.to_string())
    }
}
