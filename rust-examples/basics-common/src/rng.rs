//! Seedable pseudo-random numbers.
//!
//! The exercises draw numbers the way Go's `math/rand` does (`Intn`), but the
//! generator is always an explicit value so tests can pin the seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A pseudo-random source with `Intn`-style helpers.
///
/// # Example
///
/// ```
/// use basics_common::DemoRng;
///
/// let mut rng = DemoRng::seeded(42);
/// let x = rng.int_n(250);
/// assert!(x < 250);
/// ```
#[derive(Debug, Clone)]
pub struct DemoRng {
    inner: StdRng,
}

impl DemoRng {
    /// Creates a generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Returns a uniform value in `[0, n)`. An empty range (`n == 0`) yields `0`.
    pub fn int_n(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.inner.random_range(0..n)
    }

    /// Returns a uniform value in `[0, n)` as a signed integer.
    pub fn int_n_i64(&mut self, n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }
        self.inner.random_range(0..n)
    }
}
