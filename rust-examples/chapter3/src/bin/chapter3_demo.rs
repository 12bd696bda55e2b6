//! Chapter 3 demo: arrays and sequences
//!
//! Run with: cargo run -p basics-chapter3 --bin chapter3_demo

use basics_chapter3::{section_3_1, section_3_3};
use basics_common::logging::init_logging;

fn print_section(title: &str, lines: &[String]) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
    for line in lines {
        println!("{line}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("chapter3_demo");
    tracing::info!("starting chapter 3 demo");

    print_section("3.1 Arrays", &section_3_1::arrays_walkthrough());
    print_section("3.3 Access by position", &section_3_3::access_by_position());
    print_section("3.3 Slicing a slice", &section_3_3::slicing_a_slice()?);
    print_section("3.3 Deleting from a slice", &section_3_3::deleting_from_a_slice()?);
    print_section("3.3 make and append", &section_3_3::make_and_grow()?);
    print_section("3.3 Slice internals", &section_3_3::slice_internals()?);

    Ok(())
}
