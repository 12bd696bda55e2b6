//! Forgiving integer input.
//!
//! Mirrors a scan into a zero-valued integer: anything that does not parse
//! leaves the value at `0`.

use std::io::{self, BufRead, Write};

/// Reads one line from `reader` and parses it as an integer.
///
/// Empty, malformed, or unreadable input yields `0`.
///
/// # Example
///
/// ```
/// use basics_common::input::read_int;
///
/// assert_eq!(read_int("2\n".as_bytes()), 2);
/// assert_eq!(read_int("two\n".as_bytes()), 0);
/// assert_eq!(read_int("".as_bytes()), 0);
/// ```
pub fn read_int<R: BufRead>(mut reader: R) -> i64 {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(_) => line.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(input = line.trim(), "input is not an integer, using 0");
            0
        }),
        Err(err) => {
            tracing::debug!(%err, "failed to read input, using 0");
            0
        }
    }
}

/// Prints `prompt` on stdout and reads an integer from stdin.
pub fn prompt_int(prompt: &str) -> i64 {
    println!("{prompt}");
    io::stdout().flush().ok();
    read_int(io::stdin().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_first_line_only() {
        assert_eq!(read_int("3\n4\n".as_bytes()), 3);
    }

    #[test]
    fn test_negative_and_padded() {
        assert_eq!(read_int("  -17  \n".as_bytes()), -17);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(read_int("3.5\n".as_bytes()), 0);
        assert_eq!(read_int("\n".as_bytes()), 0);
    }
}
