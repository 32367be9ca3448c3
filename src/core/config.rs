//! Declarative state machine configuration.
//!
//! A configuration names the initial state and, for every state, the table
//! of events it reacts to. It is supplied once when a machine is created and
//! never changes afterwards.

use super::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transition table of a single state.
///
/// Maps an event name to the name of the state the event leads to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Check whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable input describing a state machine.
///
/// States are kept in a `BTreeMap`, so enumeration is always in
/// lexicographic order of state names.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::Config;
///
/// let config = Config::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.has_state("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the starting state
    pub initial: String,
    /// State name to transition table
    pub states: BTreeMap<String, StateDefinition>,
}

impl Config {
    /// Create a configuration from its parts.
    pub fn new(
        initial: impl Into<String>,
        states: impl IntoIterator<Item = (String, StateDefinition)>,
    ) -> Self {
        Self {
            initial: initial.into(),
            states: states.into_iter().collect(),
        }
    }

    /// Parse a configuration from JSON text.
    ///
    /// Only the shape is checked. The initial state and transition targets
    /// are not required to name declared states.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Transition table of `state`, if the state is declared.
    pub fn transitions(&self, state: &str) -> Option<&BTreeMap<String, String>> {
        self.states.get(state).map(|def| &def.transitions)
    }
}
