//! Price level implementation with FIFO queue
//!
//! A price level contains all orders resting at one price point, on one
//! side of one book. Orders are held as bare ids in arrival order; the
//! registry owns the records. The aggregate is maintained by the callers,
//! which know each entry's remaining quantity.

use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::Quantity;

/// A price level containing orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Order ids at this price, front = oldest
    orders: VecDeque<OrderId>,
    /// Total remaining quantity across all entries
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order_id: OrderId, quantity: Quantity) {
        self.orders.push_back(order_id);
        self.total_quantity = self.total_quantity + quantity;
    }

    /// Oldest order at this level
    pub fn front(&self) -> Option<OrderId> {
        self.orders.front().copied()
    }

    /// Remove the front order, subtracting its remaining quantity
    pub fn pop_front(&mut self, quantity: Quantity) -> Option<OrderId> {
        let id = self.orders.pop_front()?;
        self.total_quantity = self.total_quantity.saturating_sub(quantity);
        Some(id)
    }

    /// Shrink the aggregate after a partial fill or in-place reduction
    pub fn reduce(&mut self, quantity: Quantity) {
        self.total_quantity = self.total_quantity.saturating_sub(quantity);
    }

    /// Remove an order by id, subtracting its remaining quantity
    ///
    /// Returns false if the id is not at this level.
    pub fn remove(&mut self, order_id: OrderId, quantity: Quantity) -> bool {
        let Some(position) = self.orders.iter().position(|id| *id == order_id) else {
            return false;
        };
        self.orders.remove(position);
        self.total_quantity = self.total_quantity.saturating_sub(quantity);
        true
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
