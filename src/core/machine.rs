//! Configuration-driven state machine with single-step undo/redo.

use super::config::Config;
use super::error::{FsmError, Result};
use super::history::UndoHistory;
use tracing::{debug, warn};

/// State machine driven by a [`Config`].
///
/// Tracks the current state, applies transitions by state name or by event,
/// and remembers one step back and one step forward.
///
/// # Example
///
/// ```rust
/// use undo_fsm::core::{Config, StateDefinition, StateMachine};
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle".to_string(), StateDefinition::new().on("start", "running")),
///         ("running".to_string(), StateDefinition::new().on("stop", "idle")),
///     ],
/// );
/// let mut machine = StateMachine::new(config);
///
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
///
/// machine.trigger("stop").unwrap();
/// assert_eq!(machine.states(Some("start")), vec!["idle"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    current: String,
    history: UndoHistory,
}

impl StateMachine {
    /// Create a machine positioned at the configured initial state.
    ///
    /// The initial state is taken as-is, even if it is not a declared state.
    pub fn new(config: Config) -> Self {
        let current = config.initial.clone();
        Self {
            config,
            current,
            history: UndoHistory::new(),
        }
    }

    /// Name of the active state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Jump directly to `state`.
    ///
    /// Fails with [`FsmError::UnknownState`] if `state` is not declared.
    pub fn change_state(&mut self, state: &str) -> Result<()> {
        if !self.config.has_state(state) {
            warn!(state = %state, current = %self.current, "rejected change to unknown state");
            return Err(FsmError::UnknownState {
                state: state.to_string(),
            });
        }

        self.move_to(state.to_string());
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The target is used verbatim; it is not checked against the declared
    /// states. Fails with [`FsmError::UnknownEvent`] if the current state has
    /// no such transition, or [`FsmError::UndefinedState`] if the current
    /// state itself has no definition.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let Some(transitions) = self.config.transitions(&self.current) else {
            warn!(event = %event, current = %self.current, "current state has no definition");
            return Err(FsmError::UndefinedState {
                state: self.current.clone(),
            });
        };

        let Some(target) = transitions.get(event) else {
            warn!(event = %event, current = %self.current, "rejected unknown event");
            return Err(FsmError::UnknownEvent {
                event: event.to_string(),
                state: self.current.clone(),
            });
        };

        debug!(event = %event, "event accepted");
        let target = target.clone();
        self.move_to(target);
        Ok(())
    }

    /// Return to the initial state. History is kept.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "reset");
        self.current.clone_from(&self.config.initial);
    }

    /// State names, optionally restricted to those that handle `event`.
    ///
    /// `None` or an empty event name yields every declared state. Names come
    /// back in lexicographic order either way.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        let states = self.config.states.iter();
        match event.filter(|e| !e.is_empty()) {
            None => states.map(|(name, _)| name.as_str()).collect(),
            Some(event) => states
                .filter(|(_, def)| def.handles(event))
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    /// Events the current state reacts to, in lexicographic order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .transitions(&self.current)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let from = self.current.clone();
        let undone = self.history.undo(&mut self.current);
        if undone {
            debug!(from = %from, to = %self.current, "undo");
        }
        undone
    }

    /// Reapply the state left by the last undo. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.current);
        if redone {
            debug!(to = %self.current, "redo");
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop undo and redo information without changing the current state.
    pub fn clear_history(&mut self) {
        debug!(current = %self.current, "history cleared");
        self.history.clear();
    }

    fn move_to(&mut self, target: String) {
        debug!(from = %self.current, to = %target, "state changed");
        let from = std::mem::replace(&mut self.current, target);
        self.history.record(from);
    }
}

impl From<Config> for StateMachine {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}
