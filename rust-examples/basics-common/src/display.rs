//! Bracketed sequence rendering.
//!
//! Collections print as `[a b c]`: square brackets around elements separated by
//! single spaces, with no commas. Every chapter uses this to show arrays,
//! sequences and views side by side.

use std::fmt::{self, Display, Write};

/// Renders items as `[a b c]`.
///
/// # Example
///
/// ```
/// use basics_common::bracketed;
///
/// assert_eq!(bracketed([1, 2, 3]), "[1 2 3]");
/// assert_eq!(bracketed(Vec::<i32>::new()), "[]");
/// assert_eq!(bracketed(["Alice", "Bob"]), "[Alice Bob]");
/// ```
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::from("[");
    // Writing into a String cannot fail.
    let _ = write_items(&mut out, items);
    out.push(']');
    out
}

/// Writes space-separated items into any formatter sink.
///
/// Used by `Display` impls so they can stream without an intermediate `String`.
pub fn write_items<W, I>(out: &mut W, items: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{item}")?;
    }
    Ok(())
}
