//! Chapter 2: Control Flow
//!
//! This chapter covers how a program decides what runs next:
//! - Conditionals and logical operators
//! - Multi-way branching, including explicit fallthrough
//! - Waiting on whichever of two producers answers first
//! - Loops: counted, conditional, infinite with break, nested, and ranges
//! - Optional lookups (the "comma ok" check)

// Modules
pub mod section_2_1; // Conditionals
pub mod section_2_2; // Switch
pub mod section_2_3; // Select
pub mod section_2_4; // Loops
pub mod section_2_5; // Optional Lookups
