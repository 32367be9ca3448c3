//! Build errors for the configuration builder.

use thiserror::Error;

/// Errors that can occur when building a configuration.
///
/// Only presence is checked. Names are not cross-validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,
}
