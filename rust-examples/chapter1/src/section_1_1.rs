//! Section 1.1: Variables and Zero Values
//!
//! - Short declaration and multi-assignment, with a discarded value
//! - Default values, spelled out with `Default` rather than implied
//! - Enumerated constants counted from one, and the powers they index

use std::fmt;

/// Multi-assignment that throws one value away.
///
/// # Example
/// ```
/// use basics_chapter1::multi_assign;
/// assert_eq!(multi_assign(), (1, 2, "home"));
/// ```
#[must_use]
pub fn multi_assign() -> (i32, i32, &'static str) {
    let (a, b, _, c) = (1, 2, 3, "home");
    (a, b, c)
}

/// Declared first, assigned later. Rust wants the initial value written down,
/// so the "zero" comes from `Default`.
#[must_use]
pub fn declare_then_assign() -> (i32, i32) {
    let mut g = i32::default();
    let before = g;
    g = 42;
    (before, g)
}

/// The default value of each basic type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZeroValues {
    pub int: i64,
    pub float: f64,
    pub string: String,
    pub boolean: bool,
    pub complex: Complex,
}

impl fmt::Display for ZeroValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "int={} float={} string={:?} bool={} complex={}",
            self.int, self.float, self.string, self.boolean, self.complex
        )
    }
}

/// A complex number, printed as `(re+imi)`.
///
/// # Example
/// ```
/// use basics_chapter1::Complex;
/// assert_eq!(Complex::new(-1.0 * 0.5, 0.0).to_string(), "(-0.5+0i)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(f, "({}{}{}i)", self.re, sign, self.im.abs())
    }
}

/// Enumerated constants numbered from one; zero is skipped on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Ordinal {
    A = 1,
    B,
    C,
    D,
    E,
    F,
}

impl Ordinal {
    pub const ALL: [Ordinal; 6] = [
        Ordinal::A,
        Ordinal::B,
        Ordinal::C,
        Ordinal::D,
        Ordinal::E,
        Ordinal::F,
    ];

    #[must_use]
    pub fn value(self) -> u32 {
        self as u32
    }

    /// `1 << self`, as used for bit flags and size units.
    #[must_use]
    pub fn power_of_two(self) -> u64 {
        1u64 << self.value()
    }
}

/// One line per ordinal: `<binary> in binary and <decimal> in decimal`.
///
/// # Example
/// ```
/// use basics_chapter1::powers_table;
/// let lines = powers_table();
/// assert_eq!(lines[0], "10 in binary and 2 in decimal");
/// assert_eq!(lines[5], "1000000 in binary and 64 in decimal");
/// ```
#[must_use]
pub fn powers_table() -> Vec<String> {
    Ordinal::ALL
        .iter()
        .map(|ordinal| {
            let p = ordinal.power_of_two();
            format!("{p:b} in binary and {p} in decimal")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_then_assign() {
        assert_eq!(declare_then_assign(), (0, 42));
    }

    #[test]
    fn test_zero_values() {
        let zero = ZeroValues::default();
        assert_eq!(zero.int, 0);
        assert_eq!(zero.float, 0.0);
        assert!(zero.string.is_empty());
        assert!(!zero.boolean);
        assert_eq!(
            zero.to_string(),
            "int=0 float=0 string=\"\" bool=false complex=(0+0i)"
        );
    }

    #[test]
    fn test_ordinals_start_at_one() {
        let values: Vec<u32> = Ordinal::ALL.iter().map(|o| o.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_complex_negative_imaginary() {
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "(1.5-2i)");
    }
}
