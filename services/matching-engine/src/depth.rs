//! Aggregated depth snapshot
//!
//! Read-only view of the top N price levels per side, best first.

use serde::{Deserialize, Serialize};
use types::ids::Symbol;
use types::numeric::{Price, Quantity};

/// Aggregated order book depth for market data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub symbol: Symbol,
    /// Best-first (descending price)
    pub bids: Vec<(Price, Quantity)>,
    /// Best-first (ascending price)
    pub asks: Vec<(Price, Quantity)>,
}

impl DepthSnapshot {
    /// An empty snapshot, the result for an unknown symbol
    pub fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Whether both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
