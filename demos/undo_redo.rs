//! Undo/Redo Time Travel
//!
//! This example walks a document workflow forward and then travels back
//! and forth through its history.
//!
//! Key concepts:
//! - Linear history with an undo/redo cursor
//! - Redo invalidation after a fresh forward transition
//! - clear_history() as a point of no return
//!
//! Run with: cargo run --example undo_redo

use turnstile::{ConfigBuilder, StateMachine};

fn main() {
    println!("=== Undo/Redo Time Travel ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .state("published")
        .build()
        .unwrap();

    let mut machine = StateMachine::new(config);

    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("After submit + approve: {}", machine.current_state());

    machine.undo();
    machine.undo();
    println!("After two undos:        {}", machine.current_state());

    machine.redo();
    println!("After one redo:         {}", machine.current_state());

    // A fresh forward transition overwrites the remaining redo entry.
    machine.trigger("reject").unwrap();
    println!("After reject:           {}", machine.current_state());
    println!("Redo still available?   {}", machine.redo());

    println!("\nHistory so far:");
    for (i, entry) in machine.history().entries().iter().enumerate() {
        let marker = if i == machine.history().cursor() {
            "<- cursor"
        } else {
            ""
        };
        println!("  [{}] {:<10} ({:?}) {}", i, entry.state, entry.origin, marker);
    }

    machine.clear_history();
    println!(
        "\nAfter clear_history: {} entries, undo available: {}",
        machine.history().len(),
        machine.undo()
    );

    println!("\n=== Example Complete ===");
}
