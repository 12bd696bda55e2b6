//! Section 1.2: Values, Types and Conversion
//!
//! Every value has exactly one type, and Rust never converts between numeric
//! types behind your back. Widening that cannot lose information uses `From`;
//! narrowing that might fail uses `TryFrom`; `as` is the explicit, lossy cast.

use std::any::type_name;
use std::fmt::Display;

/// Renders `<value> of type <type>`.
///
/// # Example
/// ```
/// use basics_chapter1::section_1_2::describe;
/// assert_eq!(describe(&24), "24 of type i32");
/// assert_eq!(describe(&24.0), "24 of type f64");
/// ```
pub fn describe<T: Display>(value: &T) -> String {
    format!("{value} of type {}", type_name::<T>())
}

/// Widens an `f32` to `f64`. Assigning one to the other directly is a type error.
#[must_use]
pub fn widen(m: f32) -> f64 {
    f64::from(m)
}

/// Truncating cast from float to integer.
#[must_use]
pub fn truncate(x: f64) -> i64 {
    x as i64
}

/// Narrowing conversion that refuses values out of range.
///
/// # Example
/// ```
/// use basics_chapter1::section_1_2::narrow_to_byte;
/// assert_eq!(narrow_to_byte(200), Some(200));
/// assert_eq!(narrow_to_byte(300), None);
/// ```
#[must_use]
pub fn narrow_to_byte(x: i64) -> Option<u8> {
    u8::try_from(x).ok()
}

/// Lines printed by the conversion walkthrough.
#[must_use]
pub fn conversion_walkthrough() -> Vec<String> {
    let y = 24;
    let mut z = 24.0;
    let m: f32 = 43.742;

    let mut lines = vec![describe(&y), describe(&z), describe(&m)];
    z = widen(m);
    lines.push(describe(&z));
    lines.push(describe(&truncate(z)));
    lines.push(format!("300 as byte: {:?}", narrow_to_byte(300)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_reports_concrete_type() {
        assert_eq!(describe(&"home"), "home of type &str");
        assert_eq!(describe(&43.5f32), "43.5 of type f32");
    }

    #[test]
    fn test_widen_preserves_value() {
        let z = widen(43.742);
        assert!((z - 43.742).abs() < 1e-5);
    }

    #[test]
    fn test_truncate_drops_fraction() {
        assert_eq!(truncate(43.9), 43);
        assert_eq!(truncate(-2.7), -2);
    }

    #[test]
    fn test_walkthrough_types() {
        let lines = conversion_walkthrough();
        assert!(lines[0].ends_with("of type i32"));
        assert!(lines[1].ends_with("of type f64"));
        assert!(lines[2].ends_with("of type f32"));
        assert!(lines[3].ends_with("of type f64"));
        assert_eq!(lines[4], "43 of type i64");
        assert_eq!(lines[5], "300 as byte: None");
    }
}
