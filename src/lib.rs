//! undo-fsm: a minimal configuration-driven finite state machine
//!
//! A machine is built from a declarative configuration: the name of the
//! initial state plus, for every state, a table mapping event names to
//! target states. The machine tracks its current state, moves by state name
//! or by event, and can step one transition back and forward again.
//!
//! # Core Concepts
//!
//! - **Config**: Initial state and per-state transition tables
//! - **StateMachine**: Current position plus transition operations
//! - **UndoHistory**: One-slot undo and redo buffers
//!
//! # Example
//!
//! ```rust
//! use undo_fsm::{fsm_config, StateMachine};
//!
//! let mut machine = StateMachine::new(fsm_config! {
//!     initial: idle,
//!     states: {
//!         idle: { start => running },
//!         running: { stop => idle },
//!     }
//! });
//!
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.state(), "running");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "idle");
//! assert!(!machine.undo());
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "running");
//!
//! assert!(machine.change_state("paused").is_err());
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Config, FsmError, StateDefinition, StateMachine, UndoHistory};
