//! Document Editor
//!
//! This example walks a document through a review workflow and shows how
//! single-step undo and redo behave.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Undo only reaches back one step
//! - Redo only replays the last undo
//! - Clearing history
//!
//! Run with: RUST_LOG=debug cargo run --example document_editor

use tracing_subscriber::EnvFilter;
use undo_fsm::{Config, FsmError, StateMachine};

const WORKFLOW: &str = r#"{
    "initial": "draft",
    "states": {
        "draft": { "transitions": { "submit": "review" } },
        "review": { "transitions": { "approve": "published", "reject": "draft" } },
        "published": { "transitions": { "archive": "archived" } },
        "archived": {}
    }
}"#;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Editor Example ===\n");

    let mut doc = StateMachine::new(Config::from_json(WORKFLOW)?);
    println!("States: {:?}", doc.states(None));

    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("After submit + approve: {}", doc.state());

    println!("\n--- Undo ---");
    println!("undo: {} (now {})", doc.undo(), doc.state());
    println!("undo again: {} (still {})", doc.undo(), doc.state());

    println!("\n--- Redo ---");
    println!("redo: {} (now {})", doc.redo(), doc.state());
    println!("undo after redo: {}", doc.undo());

    println!("\n--- Jump and clear ---");
    doc.change_state("archived")?;
    println!("Jumped to {}; can undo: {}", doc.state(), doc.can_undo());
    doc.clear_history();
    println!("After clear; can undo: {}, can redo: {}", doc.can_undo(), doc.can_redo());

    if let Err(e) = doc.change_state("deleted") {
        println!("\nRejected: {}", e);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
