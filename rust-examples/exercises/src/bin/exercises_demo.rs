//! Exercises demo: random branching and pre-sized sequences
//!
//! Run with: cargo run -p basics-exercises --bin exercises_demo
//!
//! Set `BASICS_SEED` to replay the same draws.

use basics_common::logging::init_logging;
use basics_common::{DemoConfig, bracketed};
use basics_exercises::exercise_4::{
    binary_digits, bucket_draws, digit_draws, function_arities, pair_draws,
};
use basics_exercises::exercise_5::{state_rows, states};

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("exercises_demo");
    let config = DemoConfig::from_env()?;
    tracing::info!(?config, "starting exercises demo");
    let mut rng = config.rng();

    heading("Exercise 4: random branching");
    for _ in 0..16 {
        println!("x:-> {}", rng.int_n(250));
    }
    for line in function_arities() {
        println!("{line}");
    }
    for line in bucket_draws(&mut rng, 11) {
        println!("{line}");
    }
    println!("{}", bracketed(binary_digits(&mut rng, 16)));
    for line in pair_draws(&mut rng, 5) {
        println!("{line}");
    }
    for line in digit_draws(&mut rng, 42) {
        println!("{line}");
    }

    heading("Exercise 5: pre-sized sequences");
    let (empty, filled) = states()?;
    println!("{}\n{}", empty.len(), empty.cap());
    println!("{}\n{}", filled.len(), filled.cap());
    for row in state_rows(&filled) {
        println!("{row}");
    }

    Ok(())
}
