//! Section 3.1: Arrays
//!
//! Fixed-size arrays carry their length in the type. `[i32; 10]` and
//! `[i32; 2]` are different types, and an array is copied by value on
//! assignment, unlike the shared-store [`Sequence`](crate::Sequence).

use basics_common::bracketed;

/// Array literal with every element written out.
pub const NUMBERS: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Array literal whose length is inferred from its elements.
pub const NAMES: [&str; 4] = ["Alice", "Bob", "Charlie", "Diana"];

/// Declares a zero-initialized array, then assigns each slot.
///
/// # Example
///
/// ```
/// use basics_chapter3::section_3_1::assigned_pair;
/// assert_eq!(assigned_pair(), [100, 200]);
/// ```
#[must_use]
pub fn assigned_pair() -> [i32; 2] {
    let mut c = [0; 2];
    c[0] = 100;
    c[1] = 200;
    c
}

/// Name of an array's type, e.g. `[i32; 2]`.
#[must_use]
pub fn type_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Arrays are values: mutating a copy leaves the original alone.
///
/// Returns `(original, copy)` after writing to the copy.
#[must_use]
pub fn copy_on_assign() -> ([i32; 3], [i32; 3]) {
    let original = [1, 2, 3];
    let mut copy = original;
    copy[0] = 7;
    (original, copy)
}

/// Lines printed by the arrays walkthrough.
#[must_use]
pub fn arrays_walkthrough() -> Vec<String> {
    let pair = assigned_pair();
    let (original, copy) = copy_on_assign();
    vec![
        bracketed(NUMBERS),
        bracketed(NAMES),
        type_of(&pair).to_string(),
        format!("original: {} copy: {}", bracketed(original), bracketed(copy)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_lengths() {
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(NAMES.len(), 4);
    }

    #[test]
    fn test_type_name_includes_length() {
        assert_eq!(type_of(&assigned_pair()), "[i32; 2]");
    }

    #[test]
    fn test_arrays_copy_by_value() {
        let (original, copy) = copy_on_assign();
        assert_eq!(original, [1, 2, 3]);
        assert_eq!(copy, [7, 2, 3]);
    }

    #[test]
    fn test_walkthrough_lines() {
        let lines = arrays_walkthrough();
        assert_eq!(lines[0], "[1 2 3 4 5 6 7 8 9 10]");
        assert_eq!(lines[1], "[Alice Bob Charlie Diana]");
        assert_eq!(lines[3], "original: [1 2 3] copy: [7 2 3]");
    }
}
