//! Traffic Light
//!
//! This example drives a three-phase traffic light through its cycle.
//!
//! Key concepts:
//! - Declaring a configuration with the `fsm_config!` macro
//! - Moving between states with events
//! - Handling rejected events
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use tracing_subscriber::EnvFilter;
use undo_fsm::{fsm_config, StateMachine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light Example ===\n");

    let mut light = StateMachine::new(fsm_config! {
        initial: green,
        states: {
            green: { timer => yellow, emergency => red },
            yellow: { timer => red },
            red: { timer => green },
        }
    });

    println!("Initial state: {}", light.state());

    for _ in 0..4 {
        match light.trigger("timer") {
            Ok(()) => println!("timer -> {}", light.state()),
            Err(e) => println!("timer rejected: {}", e),
        }
    }

    println!("\nStates reacting to 'emergency': {:?}", light.states(Some("emergency")));

    if let Err(e) = light.trigger("emergency") {
        println!("In {}: {}", light.state(), e);
    }

    light.reset();
    println!("After reset: {}", light.state());

    println!("\n=== Example Complete ===");
}
