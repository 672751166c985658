//! Matching logic module
//!
//! Price-time priority predicates for the crossing loop and stop triggers.

pub mod crossing;

pub use crossing::{crosses, marketable, stop_triggered};
