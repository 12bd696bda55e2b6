//! Chapter 1 demo: values, types, variables and scope
//!
//! Run with: cargo run -p basics-chapter1 --bin chapter1_demo

use basics_chapter1::section_1_1::{
    Complex, ZeroValues, declare_then_assign, multi_assign, powers_table,
};
use basics_chapter1::section_1_2::conversion_walkthrough;
use basics_chapter1::section_1_3::{new_func, next_func, package_scope, platform};
use basics_common::logging::init_logging;

fn main() {
    init_logging("chapter1_demo");
    tracing::info!("starting chapter 1 demo");

    println!("1.1 Variables and zero values");
    println!("{}", "=".repeat(60));
    let (a, b, c) = multi_assign();
    println!("{a} {b} {c}");
    let (before, after) = declare_then_assign();
    println!("{before}\n{after}");
    println!("{}", ZeroValues::default());
    println!("{}", Complex::new(-1.0 * 0.5, 0.0));
    for line in powers_table() {
        println!("{line}");
    }

    println!("\n1.2 Values, types and conversion");
    println!("{}", "=".repeat(60));
    for line in conversion_walkthrough() {
        println!("{line}");
    }

    println!("\n1.3 Scope");
    println!("{}", "=".repeat(60));
    let scope = package_scope();
    for line in new_func(&scope).into_iter().chain(next_func(&scope)) {
        println!("{line}");
    }

    let (os, arch) = platform();
    println!("\n{os}\n{arch}");
}
