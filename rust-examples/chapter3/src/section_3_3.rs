//! Section 3.3: Working with Sequences
//!
//! Short walkthroughs built on [`Sequence`]: reading by position, slicing a
//! slice, deleting by slicing around an element, growing with `append`, and
//! how a shared store leaks a sort into the caller's data.
//!
//! Each walkthrough returns the lines it would print so the demo binary and
//! the tests see the same output.

use crate::error::Result;
use crate::section_3_2::Sequence;

const RULE: &str = "-------------------";

// =============================================================================
// Access by position
// =============================================================================

/// Range with values, then index access, then a counted loop.
#[must_use]
pub fn access_by_position() -> Vec<String> {
    let desserts: Sequence<&str> = Sequence::from_vec(vec![
        "Almond Biscotti Café",
        "Banana Pudding",
        "Balsamic Strawberry (GF)",
    ]);

    let mut lines: Vec<String> = desserts.iter().map(str::to_string).collect();
    lines.push(RULE.to_string());
    for i in 0..desserts.len() {
        // i < len, so get cannot fail here
        if let Ok(dessert) = desserts.get(i) {
            lines.push(format!("{i}: {dessert}"));
        }
    }
    lines.push(format!("len: {}", desserts.len()));
    lines.push(RULE.to_string());

    let xl = Sequence::from_vec(vec![42, 43, 44, 45, 46]);
    lines.extend(xl.iter().take(3).map(|x| x.to_string()));
    lines
}

// =============================================================================
// Slicing a slice
// =============================================================================

/// The four slice forms: `[:]`, `[2:6]`, `[:6]`, `[2:]`.
pub fn slicing_a_slice() -> Result<Vec<String>> {
    let xi: Sequence<i32> = (42..=51).collect();
    let len = xi.len();
    Ok(vec![
        format!("[:]  {}", xi.slice(0, len)?),
        format!("[2:6] {}", xi.slice(2, 6)?),
        format!("[:6] {}", xi.slice(0, 6)?),
        format!("[2:] {}", xi.slice(2, len)?),
    ])
}

// =============================================================================
// Deleting from a slice
// =============================================================================

/// Removes index 3 and shows the shifted original alongside the result.
pub fn deleting_from_a_slice() -> Result<Vec<String>> {
    let xi: Sequence<i32> = (42..=51).collect();
    let before = xi.to_string();
    let xf = xi.remove_at(3)?;
    Ok(vec![
        format!("before: {before}"),
        format!("xf:     {xf}"),
        format!("xi now: {xi}"),
    ])
}

// =============================================================================
// make and append
// =============================================================================

/// Length and capacity before and after appends that fit and that grow.
pub fn make_and_grow() -> Result<Vec<String>> {
    let si = Sequence::from_vec(vec!["A", "B", "C"]);
    let sf = Sequence::<i32>::make(0, 10)?;

    let mut lines = vec![
        si.to_string(),
        format!("{sf} len={} cap={}", sf.len(), sf.cap()),
    ];

    let filled = sf.append(1..=10);
    lines.push(format!(
        "{filled} len={} cap={} same store: {}",
        filled.len(),
        filled.cap(),
        filled.shares_storage(&sf)
    ));

    let grown = filled.append(11..=15);
    lines.push(format!(
        "{grown} len={} cap={} same store: {}",
        grown.len(),
        grown.cap(),
        grown.shares_storage(&filled)
    ));
    Ok(lines)
}

// =============================================================================
// Slice internals
// =============================================================================

/// Median that sorts the caller's store. Every alias sees the sorted order.
///
/// # Example
///
/// ```
/// use basics_chapter3::Sequence;
/// use basics_chapter3::section_3_3::median_in_place;
///
/// let x = Sequence::from_vec(vec![3.0, 1.0, 4.0, 2.0]);
/// assert_eq!(median_in_place(&x), Some(2.5));
/// assert_eq!(x.to_string(), "[1 2 3 4]");
/// ```
#[must_use]
pub fn median_in_place(x: &Sequence<f64>) -> Option<f64> {
    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);
    x.copy_from(&Sequence::from_vec(sorted));
    median_of_sorted(&x.to_vec())
}

/// Median that sorts a private copy, leaving the caller's order intact.
///
/// # Example
///
/// ```
/// use basics_chapter3::Sequence;
/// use basics_chapter3::section_3_3::median_copy;
///
/// let n = Sequence::from_vec(vec![3.0, 1.0, 4.0, 2.0]);
/// assert_eq!(median_copy(&n), Some(2.5));
/// assert_eq!(n.to_string(), "[3 1 4 2]");
/// ```
#[must_use]
pub fn median_copy(x: &Sequence<f64>) -> Option<f64> {
    let n = Sequence::<f64>::make(x.len(), x.len()).ok()?;
    n.copy_from(x);
    median_in_place(&n)
}

fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Deep copy versus shared store, then the two medians.
pub fn slice_internals() -> Result<Vec<String>> {
    let a = Sequence::from_vec(vec![1, 2, 3, 4, 5]);
    let b = Sequence::<i32>::make(6, 6)?;
    b.copy_from(&a);

    let mut lines = vec![format!("a: {a}"), format!("b: {b}"), RULE.to_string()];
    a.set(0, 7)?;
    lines.push(format!("a: {a}"));
    lines.push(format!("b: {b}"));
    lines.push(RULE.to_string());

    let x = Sequence::from_vec(vec![3.0, 1.0, 4.0, 2.0]);
    let n = Sequence::from_vec(vec![3.0, 1.0, 4.0, 2.0]);
    let show = |m: Option<f64>| m.map_or_else(|| "none".to_string(), |v| v.to_string());
    lines.push(show(median_in_place(&x)));
    lines.push(x.to_string());
    lines.push(show(median_copy(&n)));
    lines.push(n.to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_by_position() {
        let lines = access_by_position();
        assert_eq!(lines[0], "Almond Biscotti Café");
        assert!(lines.contains(&"1: Banana Pudding".to_string()));
        assert!(lines.contains(&"len: 3".to_string()));
        assert_eq!(&lines[lines.len() - 3..], ["42", "43", "44"]);
    }

    #[test]
    fn test_slicing_a_slice() {
        let lines = slicing_a_slice().unwrap();
        assert_eq!(lines[0], "[:]  [42 43 44 45 46 47 48 49 50 51]");
        assert_eq!(lines[1], "[2:6] [44 45 46 47]");
        assert_eq!(lines[2], "[:6] [42 43 44 45 46 47]");
        assert_eq!(lines[3], "[2:] [44 45 46 47 48 49 50 51]");
    }

    #[test]
    fn test_deleting_shifts_original() {
        let lines = deleting_from_a_slice().unwrap();
        assert_eq!(lines[1], "xf:     [42 43 44 46 47 48 49 50 51]");
        assert_eq!(lines[2], "xi now: [42 43 44 46 47 48 49 50 51 51]");
    }

    #[test]
    fn test_make_and_grow_reports() {
        let lines = make_and_grow().unwrap();
        assert_eq!(lines[0], "[A B C]");
        assert_eq!(lines[1], "[] len=0 cap=10");
        assert!(lines[2].ends_with("len=10 cap=10 same store: true"));
        assert!(lines[3].ends_with("len=15 cap=20 same store: false"));
    }

    #[test]
    fn test_slice_internals_copy_is_independent() {
        let lines = slice_internals().unwrap();
        assert_eq!(lines[0], "a: [1 2 3 4 5]");
        assert_eq!(lines[1], "b: [1 2 3 4 5 0]");
        assert_eq!(lines[3], "a: [7 2 3 4 5]");
        assert_eq!(lines[4], "b: [1 2 3 4 5 0]");
        assert_eq!(&lines[6..], ["2.5", "[1 2 3 4]", "2.5", "[3 1 4 2]"]);
    }

    #[test]
    fn test_median_sorts_through_aliases() {
        let x = Sequence::from_vec(vec![5.0, 3.0, 1.0]);
        let alias = x.clone();
        assert_eq!(median_in_place(&x), Some(3.0));
        assert_eq!(alias.to_vec(), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_median_of_empty() {
        let empty = Sequence::<f64>::new();
        assert_eq!(median_in_place(&empty), None);
        assert_eq!(median_copy(&empty), None);
    }
}
