//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for creating
//! configurations with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::ConfigBuilder;

use crate::core::Config;

/// Create a configuration from `(from, event, to)` rows.
///
/// # Example
///
/// ```
/// use undo_fsm::builder::from_table;
///
/// let config = from_table("idle", [("idle", "start", "running"), ("running", "stop", "idle")])
///     .unwrap();
///
/// assert_eq!(config.states.len(), 2);
/// ```
pub fn from_table<'a, I>(initial: &str, rows: I) -> Result<Config, BuildError>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    rows.into_iter()
        .fold(
            ConfigBuilder::new().initial(initial),
            |builder, (from, event, to)| builder.transition(from, event, to),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_become_transitions() {
        let config = from_table("a", [("a", "next", "b"), ("b", "next", "a"), ("a", "stay", "a")])
            .unwrap();

        assert_eq!(config.initial, "a");
        assert_eq!(config.transitions("a").map(|t| t.len()), Some(2));
    }

    #[test]
    fn empty_table_has_no_states() {
        let result = from_table("a", Vec::<(&str, &str, &str)>::new());

        assert_eq!(result, Err(BuildError::NoStates));
    }
}
