//! Section 2.1: Conditionals
//!
//! `if` / `else if` / `else` chains run at most one arm: the first whose
//! condition holds. Logical operators `&&` and `||` short-circuit.

use basics_common::DemoRng;

/// The three chains of the walkthrough, evaluated for `x`.
///
/// # Example
/// ```
/// use basics_chapter2::section_2_1::if_chains;
/// assert_eq!(
///     if_chains(42),
///     vec!["greater than 20", "equal to 42", "less than or equal to 42"]
/// );
/// ```
#[must_use]
pub fn if_chains(x: i64) -> Vec<&'static str> {
    let mut taken = Vec::new();

    if x > 20 {
        taken.push("greater than 20");
    }

    if x == 42 {
        taken.push("equal to 42");
    } else if x >= 42 {
        taken.push("greater than or equal to 42");
    } else {
        taken.push("none of the conditions held");
    }

    if x < 40 {
        taken.push("less than 40");
    } else if x <= 42 {
        taken.push("less than or equal to 42");
    } else if x != 40 {
        taken.push("not equal to 40");
    }

    taken
}

/// Which of the `&&`, `||` and `!=` blocks run for `a` and `b`.
#[must_use]
pub fn logical_operators(a: i64, b: i64) -> Vec<&'static str> {
    let mut taken = Vec::new();
    if a > b && b < a {
        taken.push("both conditions hold");
    }
    if a > b || b > a {
        taken.push("at least one condition holds");
    }
    if a != b {
        taken.push("a and b differ");
    }
    taken
}

/// Compares `2 * rand(limit)` against `y`, binding the draw only for the
/// duration of the comparison.
pub fn compare_doubled_draw(rng: &mut DemoRng, limit: i64, y: i64) -> String {
    match 2 * rng.int_n_i64(limit) {
        z if z < y => format!("{z} is less than {y}"),
        z => format!("{z} is not less than {y}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_chains_below_forty() {
        assert_eq!(
            if_chains(10),
            vec!["none of the conditions held", "less than 40"]
        );
    }

    #[test]
    fn test_if_chains_above_forty_two() {
        assert_eq!(
            if_chains(50),
            vec![
                "greater than 20",
                "greater than or equal to 42",
                "not equal to 40"
            ]
        );
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(logical_operators(13, 12).len(), 3);
        assert!(logical_operators(5, 5).is_empty());
        assert_eq!(
            logical_operators(1, 2),
            vec!["at least one condition holds", "a and b differ"]
        );
    }

    #[test]
    fn test_doubled_draw_always_less_than_twice_limit() {
        let mut rng = DemoRng::seeded(11);
        for _ in 0..50 {
            let line = compare_doubled_draw(&mut rng, 20, 40);
            assert!(line.ends_with("is less than 40"), "{line}");
        }
    }
}
