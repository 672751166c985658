//! Trade types
//!
//! A trade records one crossing step: the buy and sell order ids, the
//! execution price (always the resting order's price) and the filled
//! quantity.

use crate::ids::{OrderId, Symbol};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// An executed match between a resting and an incoming order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Global monotonic trade sequence
    pub sequence: u64,
    pub symbol: Symbol,
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    /// Side of the incoming (taker) order
    pub taker_side: Side,
    /// Execution price, taken from the resting order
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    /// Notional value (price x quantity)
    pub fn trade_value(&self) -> rust_decimal::Decimal {
        self.price.as_decimal() * self.quantity.as_decimal()
    }

    /// Order id of the resting (maker) side
    pub fn maker_order_id(&self) -> OrderId {
        match self.taker_side {
            Side::Buy => self.sell_order_id,
            Side::Sell => self.buy_order_id,
        }
    }

    /// Order id of the incoming (taker) side
    pub fn taker_order_id(&self) -> OrderId {
        match self.taker_side {
            Side::Buy => self.buy_order_id,
            Side::Sell => self.sell_order_id,
        }
    }
}
