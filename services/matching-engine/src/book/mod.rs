//! Order book infrastructure module
//!
//! Contains price levels, the bid and ask ladders, and the per-symbol
//! book that ties both sides to the pending-stop list.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::PriceLevel;

use serde::{Deserialize, Serialize};
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::Side;

/// One side's best price and its aggregate quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub price: Price,
    pub quantity: Quantity,
}

/// Best bid and ask of a book at one instant
pub type TopOfBook = (Option<Quote>, Option<Quote>);

/// Order book for a single symbol
#[derive(Debug, Clone)]
pub struct Book {
    symbol: Symbol,
    pub bids: BidBook,
    pub asks: AskBook,
    /// Stop orders awaiting their trigger, in arrival order
    pub stops: Vec<OrderId>,
}

impl Book {
    /// Create an empty book for a symbol
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: BidBook::new(),
            asks: AskBook::new(),
            stops: Vec::new(),
        }
    }

    /// The book's symbol
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Rest an order at a price on one side
    pub fn insert(&mut self, side: Side, order_id: OrderId, price: Price, quantity: Quantity) {
        match side {
            Side::Buy => self.bids.insert(order_id, price, quantity),
            Side::Sell => self.asks.insert(order_id, price, quantity),
        }
    }

    /// Remove a resting order from one side
    pub fn remove(&mut self, side: Side, order_id: OrderId, price: Price, quantity: Quantity) -> bool {
        match side {
            Side::Buy => self.bids.remove(order_id, price, quantity),
            Side::Sell => self.asks.remove(order_id, price, quantity),
        }
    }

    /// Snapshot both best levels for change detection
    pub fn top_of_book(&self) -> TopOfBook {
        let quote = |side: Option<(Price, Quantity)>| {
            side.map(|(price, quantity)| Quote { price, quantity })
        };
        (quote(self.bids.best()), quote(self.asks.best()))
    }
}
