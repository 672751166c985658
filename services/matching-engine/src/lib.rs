//! Matching Engine Service
//!
//! Continuous double-auction order matching under price-time priority:
//! submit, cancel and modify orders across independently-booked symbols,
//! drain the trades and top-of-book changes they produce, and query
//! aggregated depth.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (sequence is the sole tie-break)
//! - Deterministic matching (same inputs → same outputs)
//! - Trades always execute at the resting order's price
//! - Level aggregates equal the sum of their resting orders' remainders

pub mod book;
pub mod config;
pub mod depth;
pub mod engine;
pub mod events;
pub mod matching;
pub mod registry;

pub use config::EngineConfig;
pub use depth::DepthSnapshot;
pub use engine::MatchingEngine;
pub use events::EngineEvent;
