//! Section 2.4: Loops
//!
//! Rust has three loop forms: `for` over an iterator, `while` on a condition,
//! and `loop` until an explicit `break`. `continue` skips to the next round.

use std::collections::HashMap;
use std::fmt::Display;

/// Counted loop over `0..=last`.
#[must_use]
pub fn counted(last: u32) -> Vec<String> {
    (0..=last)
        .map(|i| format!("Iteration number: {i}"))
        .collect()
}

/// Condition loop: counts `x` up from `start` while it stays below `limit`.
#[must_use]
pub fn while_below(start: i64, limit: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut x = start;
    while x < limit {
        lines.push(format!("Value of x: {x}"));
        x += 1;
    }
    lines
}

/// Infinite loop stepping by `step`; breaks once the value passes `limit`.
///
/// The value is reported before the check, so the first value past the
/// limit is reported too.
///
/// # Example
/// ```
/// use basics_chapter2::section_2_4::until_past;
/// let lines = until_past(16, 2);
/// assert_eq!(lines.first().unwrap(), "loop until 16: 0");
/// assert_eq!(lines.last().unwrap(), "loop until 16: 18");
/// ```
#[must_use]
pub fn until_past(limit: i64, step: i64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut z = 0;
    loop {
        lines.push(format!("loop until {limit}: {z}"));
        if z > limit || step <= 0 {
            break;
        }
        z += step;
    }
    lines
}

/// Even numbers below `n`, skipping odd ones with `continue`.
#[must_use]
pub fn evens_below(n: u32) -> Vec<u32> {
    let mut evens = Vec::new();
    for j in 0..n {
        if j % 2 != 0 {
            continue;
        }
        evens.push(j);
    }
    evens
}

/// Every (outer, inner) pair of two nested counted loops.
#[must_use]
pub fn nested(outer: u32, inner: u32) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for i in 0..=outer {
        for j in 0..=inner {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Ranging over a slice yields positions and values in order.
pub fn range_with_index<T: Display>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, v)| format!("index: {i}, value: {v}"))
        .collect()
}

/// Ranging over a map. The iteration order of a `HashMap` is unspecified and
/// changes between runs, so callers must not rely on it.
pub fn range_over_map<V: Display>(map: &HashMap<&str, V>) -> Vec<String> {
    map.iter()
        .map(|(k, v)| format!("key: {k}, value: {v}"))
        .collect()
}

/// The fruit map used by the walkthrough.
#[must_use]
pub fn fruit_prices() -> HashMap<&'static str, i32> {
    HashMap::from([("apple", 10), ("banana", 20), ("cherry", 30)])
}
