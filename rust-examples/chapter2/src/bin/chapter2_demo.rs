//! Chapter 2 demo: control flow
//!
//! Run with: cargo run -p basics-chapter2 --bin chapter2_demo
//!
//! Reads one number from stdin for the switch section. Set `BASICS_SEED` to
//! make the random parts repeatable.

use basics_chapter2::section_2_1::{compare_doubled_draw, if_chains, logical_operators};
use basics_chapter2::section_2_2::{classify_number, number_fallthrough};
use basics_chapter2::section_2_3::race_random;
use basics_chapter2::section_2_4::{
    counted, evens_below, fruit_prices, nested, range_over_map, range_with_index, until_past,
    while_below,
};
use basics_chapter2::section_2_5::{describe_lookup, number_words};
use basics_common::DemoConfig;
use basics_common::input::prompt_int;
use basics_common::logging::init_logging;

fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("chapter2_demo");
    let config = DemoConfig::from_env()?;
    tracing::info!(?config, "starting chapter 2 demo");
    let mut rng = config.rng();

    heading("2.1 Conditionals");
    for line in if_chains(42) {
        println!("{line}");
    }
    for line in logical_operators(13, 12) {
        println!("{line}");
    }
    println!("{}", compare_doubled_draw(&mut rng, 20, 40));

    heading("2.2 Switch");
    let x = prompt_int("Enter a number between 1 to 3:");
    println!("{}", classify_number(x));
    for line in number_fallthrough().run(&2) {
        println!("{line}");
    }

    heading("2.3 Select");
    let outcome = race_random(&mut rng, config.race_max).await?;
    println!("{outcome}");

    heading("2.4 Loops");
    counted(5).iter().for_each(|line| println!("{line}"));
    while_below(0, 10).iter().for_each(|line| println!("{line}"));
    until_past(16, 2).iter().for_each(|line| println!("{line}"));
    for j in evens_below(10) {
        println!("even number: {j}");
    }
    for (i, j) in nested(5, 5) {
        println!("outer loop: {i} \t inner loop: {j}");
    }
    range_with_index(&[10, 20, 30, 40, 50])
        .iter()
        .for_each(|line| println!("{line}"));
    // order differs between runs
    range_over_map(&fruit_prices())
        .iter()
        .for_each(|line| println!("{line}"));

    heading("2.5 Optional lookups");
    let words = number_words();
    for key in ["one", "two", "three", "four"] {
        println!("{}", describe_lookup(&words, key));
    }

    Ok(())
}
