//! Chapter 1: Values, Types and Variables
//!
//! This chapter introduces the basic building blocks:
//! - Declaration, assignment and default (zero) values
//! - Discarding values and enumerated constants
//! - Values, types and explicit conversion
//! - Scope, without global mutable state

pub mod section_1_1; // Variables and Zero Values
pub mod section_1_2; // Values, Types and Conversion
pub mod section_1_3; // Scope and the Development Environment

// Re-export commonly used items
pub use section_1_1::*;
