//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Declarative configuration via the machine_config! macro
//! - Event-driven transitions with trigger()
//! - Querying states by the events they handle
//!
//! Run with: cargo run --example traffic_light

use turnstile::{machine_config, StateMachine};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: "red",
        states: {
            "red" => { "advance" => "green" },
            "green" => { "advance" => "yellow" },
            "yellow" => { "advance" => "red" },
        }
    };

    let mut machine = StateMachine::new(config);

    println!("Initial state: {}\n", machine.current_state());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = machine.current_state().to_owned();
        machine.trigger("advance").unwrap();
        println!("  {} -> {}", from, machine.current_state());
    }

    println!("\nAll states: {:?}", machine.states(None));
    println!(
        "States handling 'advance': {:?}",
        machine.states(Some("advance"))
    );
    println!(
        "States handling 'halt': {:?}",
        machine.states(Some("halt"))
    );

    println!("\nThis is a cyclic machine - the sequence repeats:");
    println!("  red -> green -> yellow -> red -> green -> ...");

    println!("\n=== Example Complete ===");
}
