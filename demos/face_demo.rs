//! Demonstration of the idle face.
//!
//! This example shows how to:
//! 1. Drive the expression model by hand and render it
//! 2. Run the idle animator on a headless display with a fixed seed
//! 3. Read the session statistics
//!
//! Run with: cargo run --example face_demo

use idle_face::{Behavior, Face, IdleAnimator, MemoryDisplay, RandomSampler};

fn print_panel(display: &MemoryDisplay) {
    println!("+----------------+");
    for line in display.lines() {
        println!("|{line}|");
    }
    println!("+----------------+");
}

fn main() {
    println!("Idle Face - Demo");
    println!("================");
    println!();

    // A hand-driven expression
    let mut face = Face::new();
    face.look_left();
    face.smile();
    face.wink();

    let mut display = MemoryDisplay::new();
    if let Err(e) = face.render(&mut display) {
        eprintln!("Render failed: {e}");
        return;
    }
    println!("Glancing left with a wink and a smile:");
    print_panel(&display);
    println!();

    // Twenty idle ticks with a reproducible seed
    let mut animator = IdleAnimator::new(
        MemoryDisplay::new(),
        RandomSampler::with_seed(2024),
        Behavior::lively(),
    );

    for tick in 1..=20 {
        match animator.tick() {
            Ok(fired) if !fired.is_empty() => {
                let names: Vec<&str> = fired.iter().map(|a| a.as_str()).collect();
                println!("Tick {tick:>2}: {}", names.join(", "));
                print_panel(animator.display());
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Tick failed: {e}");
                return;
            }
        }
    }

    println!();
    println!("{}", animator.stats().summary());
}
