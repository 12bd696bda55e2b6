//! Hands-on Exercises
//!
//! Practice problems that combine the chapters:
//! - Branching on pseudo-random numbers (if chains, tagless matches, digit names)
//! - Filling a pre-sized sequence and walking it with positions

pub mod exercise_4; // Random Branching
pub mod exercise_5; // Pre-sized Sequences
