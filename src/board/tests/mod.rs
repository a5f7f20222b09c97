//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Reference node counts for move generation
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod perft;
