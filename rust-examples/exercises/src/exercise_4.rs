//! Exercise 4: Branching on Random Numbers
//!
//! Each helper is a pure function of its inputs; the `*_draws` variants take
//! an explicit [`DemoRng`] so runs can be replayed with a fixed seed.

use basics_common::DemoRng;

pub const LOW: &str = "Between 0 and 100";
pub const MIDDLE: &str = "Between 100 and 200";
pub const HIGH: &str = "Between 200 and 250";

/// Buckets `x` with three independent `if`s.
///
/// The boundaries are exclusive on both sides, so 100, 101, 200 and 201 fall
/// into no bucket at all.
///
/// # Example
/// ```
/// use basics_exercises::exercise_4::{range_bucket, LOW};
/// assert_eq!(range_bucket(42), Some(LOW));
/// assert_eq!(range_bucket(101), None);
/// ```
#[must_use]
pub fn range_bucket(x: u64) -> Option<&'static str> {
    let mut bucket = None;
    if x < 100 {
        bucket = Some(LOW);
    }
    if 101 < x && x < 200 {
        bucket = Some(MIDDLE);
    }
    if 201 < x && x < 250 {
        bucket = Some(HIGH);
    }
    bucket
}

/// The same buckets written as a single `match` on ranges.
#[must_use]
pub fn range_bucket_match(x: u64) -> Option<&'static str> {
    match x {
        0..=99 => Some(LOW),
        102..=199 => Some(MIDDLE),
        202..=249 => Some(HIGH),
        _ => None,
    }
}

/// `count` draws below 250 with their buckets, as `x: <n> -> <bucket>`.
pub fn bucket_draws(rng: &mut DemoRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let x = rng.int_n(250);
            format!("x: {x} -> {}", range_bucket_match(x).unwrap_or(""))
        })
        .collect()
}

/// `count` random binary digits.
pub fn binary_digits(rng: &mut DemoRng, count: usize) -> Vec<u64> {
    (0..count).map(|_| rng.int_n(2)).collect()
}

/// Names a digit from zero to four.
#[must_use]
pub fn name_digit(x: u64) -> &'static str {
    match x {
        0 => "Zero",
        1 => "One",
        2 => "Two",
        3 => "Three",
        4 => "Four",
        _ => "Unknown Number",
    }
}

/// `count` draws below five, each named with its iteration number.
pub fn digit_draws(rng: &mut DemoRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let x = rng.int_n(5);
            format!("{x}: {} | Iteration no. {i}", name_digit(x))
        })
        .collect()
}

/// Tagless switch over two values; the first arm that holds wins.
///
/// # Example
/// ```
/// use basics_exercises::exercise_4::compare_pair;
/// assert_eq!(compare_pair(1, 2), "x and y both less than 4");
/// assert_eq!(compare_pair(8, 5), "none of the above");
/// ```
#[must_use]
pub fn compare_pair(x: u64, y: u64) -> &'static str {
    match (x, y) {
        (x, y) if x < 4 && y < 4 => "x and y both less than 4",
        (x, y) if x > 6 && y > 6 => "x and y both greater than 6",
        (4..=6, _) => "x is between 4 and 6",
        (_, y) if y != 5 => "y is not equal to 5",
        _ => "none of the above",
    }
}

/// `count` pairs of draws below ten with their classification.
pub fn pair_draws(rng: &mut DemoRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let x = rng.int_n(10);
            let y = rng.int_n(10);
            format!("x: {x} , y: {y}\n{}", compare_pair(x, y))
        })
        .collect()
}

/// Function shapes by parameter count.
pub const FUNCTION_ARITIES: [(&str, &str); 5] = [
    ("Niladic", "fn do_something()"),
    ("Monadic", "fn square(x: i64)"),
    ("Dyadic", "fn add(a: i64, b: i64)"),
    ("Triadic", "fn volume(l: i64, w: i64, h: i64)"),
    ("Polyadic", "fn sum(nums: &[i64])"),
];

#[must_use]
pub fn function_arities() -> Vec<String> {
    FUNCTION_ARITIES
        .iter()
        .enumerate()
        .map(|(params, (name, signature))| {
            if params < 4 {
                format!("{name} ({params} parameters) - {signature}")
            } else {
                format!("{name} (many parameters) - {signature}")
            }
        })
        .collect()
}
