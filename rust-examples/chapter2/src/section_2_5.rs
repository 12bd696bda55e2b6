//! Section 2.5: Optional Lookups
//!
//! Looking up a missing key in a map must be distinguishable from finding a
//! stored zero. Go returns a second `ok` boolean; Rust returns an `Option`.

use std::collections::HashMap;

/// The number-word map used by the walkthrough.
#[must_use]
pub fn number_words() -> HashMap<&'static str, i32> {
    HashMap::from([("one", 1), ("two", 2), ("three", 3)])
}

/// Renders a lookup as `<value> true` or `not found`.
///
/// # Example
/// ```
/// use basics_chapter2::section_2_5::{describe_lookup, number_words};
///
/// let words = number_words();
/// assert_eq!(describe_lookup(&words, "two"), "2 true");
/// assert_eq!(describe_lookup(&words, "four"), "not found");
/// ```
pub fn describe_lookup(map: &HashMap<&str, i32>, key: &str) -> String {
    if let Some(num) = map.get(key) {
        format!("{num} true")
    } else {
        "not found".to_string()
    }
}

/// A stored zero and a missing key look the same without the `Option`.
#[must_use]
pub fn zero_or_missing(map: &HashMap<&str, i32>, key: &str) -> i32 {
    map.get(key).copied().unwrap_or_default()
}
