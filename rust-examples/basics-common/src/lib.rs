//! # Basics Common Utilities
//!
//! Shared plumbing for the chapter crates and their demo binaries.
//!
//! ## Modules
//!
//! - [`config`]: Demo settings read from environment variables
//! - [`display`]: Bracketed, space-separated rendering of sequences
//! - [`input`]: Forgiving integer input from standard input
//! - [`logging`]: `tracing` subscriber setup writing to stderr
//! - [`rng`]: Seedable pseudo-random numbers with `Intn`-style helpers
//!
//! ## Design Principles
//!
//! 1. **Stdout is the product**: demos print their results to stdout, diagnostics go to stderr
//! 2. **Explicit state**: seeds and settings are passed in, never read from globals
//! 3. **Reproducible**: every random path accepts a fixed seed for tests

pub mod config;
pub mod display;
pub mod input;
pub mod logging;
pub mod rng;

// Re-export main types for convenience
pub use config::{ConfigError, DemoConfig};
pub use display::bracketed;
pub use rng::DemoRng;
