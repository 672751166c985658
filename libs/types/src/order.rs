//! Order lifecycle types
//!
//! An order is created from an [`OrderSpec`] by the registry, mutated by
//! match/cancel/modify, and goes terminal on full fill, cancel or
//! rejection. Stop orders park in `PendingTrigger` until a trade price
//! crosses their stop price.

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order kind
///
/// A closed set so the crossing loop branches on the tag; no dynamic
/// dispatch on the hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderKind {
    /// Rests at its limit price when not marketable
    Limit,
    /// Crosses at any price, never rests
    Market,
    /// Parked until a trade price crosses the stop price
    Stop,
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Booked (or crossing) with no fills yet
    Active,
    /// Booked with some quantity already filled
    PartiallyFilled,
    /// Completely matched (terminal)
    Filled,
    /// Cancelled by the caller or discarded by the engine (terminal)
    Cancelled,
    /// Failed validation (terminal)
    Rejected,
    /// Stop order awaiting its trigger
    PendingTrigger,
}

impl OrderStatus {
    /// Check if status is terminal (no further transitions possible)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled | OrderStatus::Cancelled | OrderStatus::Rejected
        )
    }
}

/// Caller-supplied order parameters, validated by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub symbol: Symbol,
    pub side: Side,
    pub kind: OrderKind,
    /// Required for Limit; optional for Stop (a stop carrying one triggers
    /// into a limit order instead of a market order)
    pub limit_price: Option<Price>,
    /// Required for Stop
    pub stop_price: Option<Price>,
    pub quantity: Quantity,
}

impl OrderSpec {
    /// A limit order spec
    pub fn limit(symbol: Symbol, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Limit,
            limit_price: Some(price),
            stop_price: None,
            quantity,
        }
    }

    /// A market order spec
    pub fn market(symbol: Symbol, side: Side, quantity: Quantity) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Market,
            limit_price: None,
            stop_price: None,
            quantity,
        }
    }

    /// A stop-market order spec
    pub fn stop(symbol: Symbol, side: Side, stop_price: Price, quantity: Quantity) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Stop,
            limit_price: None,
            stop_price: Some(stop_price),
            quantity,
        }
    }

    /// A stop-limit order spec
    pub fn stop_limit(
        symbol: Symbol,
        side: Side,
        stop_price: Price,
        limit_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            symbol,
            side,
            kind: OrderKind::Stop,
            limit_price: Some(limit_price),
            stop_price: Some(stop_price),
            quantity,
        }
    }
}

/// A live order record, owned by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub kind: OrderKind,
    pub limit_price: Option<Price>,
    pub stop_price: Option<Price>,
    /// Remaining (unfilled) quantity
    pub quantity: Quantity,
    pub original_quantity: Quantity,
    /// Arrival order, the sole tie-break at equal price
    pub sequence: u64,
    pub status: OrderStatus,
}

impl Order {
    /// Quantity filled so far
    pub fn filled_quantity(&self) -> Quantity {
        self.original_quantity.saturating_sub(self.quantity)
    }

    /// Check if order is completely filled
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero() && self.status == OrderStatus::Filled
    }

    /// Reduce remaining quantity by a fill and adjust status
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity.
    pub fn apply_fill(&mut self, fill: Quantity) {
        self.quantity = self.quantity - fill;
        self.status = if self.quantity.is_zero() {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
    }
}
