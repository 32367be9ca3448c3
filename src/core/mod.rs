//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - Declarative configuration via `Config` and `StateDefinition`
//! - The `StateMachine` that tracks and changes the current state
//! - Single-step undo/redo via `UndoHistory`
//!
//! Nothing here performs I/O. Transitions are reported through `tracing`.

mod config;
mod error;
mod history;
mod machine;

pub use config::{Config, StateDefinition};
pub use error::{FsmError, Result};
pub use history::UndoHistory;
pub use machine::StateMachine;
