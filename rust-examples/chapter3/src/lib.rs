//! Chapter 3: Grouping Data
//!
//! This chapter collects values into groups:
//! - Fixed-size arrays (value semantics, length in the type)
//! - Sequences (headers over a shared, growable backing store)
//! - Slicing, deleting, appending and copying in practice

pub mod error;

// Modules
pub mod section_3_1; // Arrays
pub mod section_3_2; // Sequences
pub mod section_3_3; // Working with Sequences

pub use error::{Result, SequenceError};
pub use section_3_2::{Sequence, copy};
