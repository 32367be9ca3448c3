//! Builder for constructing state machine configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, StateDefinition, StateMachine};
use std::collections::BTreeMap;

/// Builder for [`Config`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use undo_fsm::builder::ConfigBuilder;
///
/// let mut machine = ConfigBuilder::new()
///     .initial("green")
///     .transition("green", "timer", "yellow")
///     .transition("yellow", "timer", "red")
///     .transition("red", "timer", "green")
///     .build_machine()
///     .unwrap();
///
/// machine.trigger("timer").unwrap();
/// assert_eq!(machine.state(), "yellow");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: BTreeMap<String, StateDefinition>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again keeps its transitions.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition from `from` on `event` to `to`.
    ///
    /// `from` is declared if needed; `to` is not.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(Config {
            initial,
            states: self.states,
        })
    }

    /// Build the configuration and wrap it in a machine.
    pub fn build_machine(self) -> Result<StateMachine, BuildError> {
        self.build().map(StateMachine::new)
    }
}
