//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::core::Config) from a compact literal.
///
/// State and event names are written as identifiers.
///
/// # Example
///
/// ```
/// use undo_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle: { start => running },
///         running: { stop => idle, finish => done },
///         done: {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident : {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = ::std::collections::BTreeMap::new();
        $(
            #[allow(unused_mut)]
            let mut definition = $crate::core::StateDefinition::new();
            $(
                definition = definition.on(stringify!($event), stringify!($target));
            )*
            states.insert(stringify!($state).to_string(), definition);
        )*
        $crate::core::Config {
            initial: stringify!($initial).to_string(),
            states,
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateMachine;

    #[test]
    fn fsm_config_macro_builds_tables() {
        let config = fsm_config! {
            initial: idle,
            states: {
                idle: { start => running },
                running: { stop => idle, pause => paused },
                paused: { resume => running },
            }
        };

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states.len(), 3);
        assert_eq!(
            config.transitions("running").and_then(|t| t.get("pause")),
            Some(&"paused".to_string())
        );
    }

    #[test]
    fn fsm_config_supports_empty_states() {
        let config = fsm_config! {
            initial: only,
            states: {
                only: {}
            }
        };

        assert!(config.has_state("only"));
        assert_eq!(config.transitions("only").map(|t| t.len()), Some(0));
    }

    #[test]
    fn fsm_config_drives_machine() {
        let mut machine = StateMachine::new(fsm_config! {
            initial: off,
            states: {
                off: { toggle => on },
                on: { toggle => off },
            },
        });

        machine.trigger("toggle").unwrap();
        assert_eq!(machine.state(), "on");
        assert_eq!(machine.states(Some("toggle")), vec!["off", "on"]);
    }
}
