//! Crossing and trigger predicates
//!
//! Pure price comparisons used by the matching loop: whether an incoming
//! limit price crosses the opposite best, and whether a trade price fires
//! a pending stop.

use types::numeric::Price;
use types::order::Side;

/// Check if an incoming limit order crosses a resting price
///
/// A buy crosses when its limit is at or above the resting ask; a sell
/// crosses when its limit is at or below the resting bid.
pub fn crosses(taker_side: Side, limit_price: Price, resting_price: Price) -> bool {
    match taker_side {
        Side::Buy => limit_price >= resting_price,
        Side::Sell => limit_price <= resting_price,
    }
}

/// Check if an incoming order is marketable against a resting price
///
/// `limit_price` of None means the order is unbounded (market, or a
/// triggered stop without a limit).
pub fn marketable(taker_side: Side, limit_price: Option<Price>, resting_price: Price) -> bool {
    match limit_price {
        None => true,
        Some(limit) => crosses(taker_side, limit, resting_price),
    }
}

/// Check if a trade price fires a pending stop
///
/// Buy stops fire when the trade price rises to or through the stop
/// price; sell stops when it falls to or through it.
pub fn stop_triggered(stop_side: Side, stop_price: Price, trade_price: Price) -> bool {
    match stop_side {
        Side::Buy => trade_price >= stop_price,
        Side::Sell => trade_price <= stop_price,
    }
}
