//! Order registry
//!
//! Owns every order record in a dense id-indexed arena and issues ids and
//! sequence numbers. Price levels hold bare ids and resolve them here, so
//! the registry stays the single source of truth for remaining quantity.
//! Terminal orders remain in the arena, which is what guarantees an id is
//! never reused for a new order.

use types::errors::{EngineError, OrderError};
use types::ids::OrderId;
use types::order::{Order, OrderKind, OrderSpec, OrderStatus};

/// Upper bound on live records; the foreign boundary carries ids as a
/// signed 32-bit integer.
const MAX_ORDERS: usize = i32::MAX as usize;

/// Arena of order records with monotonic id and sequence allocation
#[derive(Debug, Default)]
pub struct OrderRegistry {
    /// Index i holds the order with id i + 1
    orders: Vec<Order>,
    next_sequence: u64,
}

impl OrderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Next globally monotonic sequence number
    pub fn next_sequence(&mut self) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }

    /// Validate a spec and allocate its order record
    ///
    /// Malformed specs are rejected with an [`OrderError`]; nothing is
    /// allocated for them.
    pub fn allocate(&mut self, spec: OrderSpec) -> Result<OrderId, EngineError> {
        Self::validate(&spec)?;
        if self.orders.len() >= MAX_ORDERS {
            return Err(EngineError::CapacityExhausted);
        }

        let id = OrderId::from_u64(self.orders.len() as u64 + 1);
        let sequence = self.next_sequence();
        let status = match spec.kind {
            OrderKind::Stop => OrderStatus::PendingTrigger,
            OrderKind::Limit | OrderKind::Market => OrderStatus::Active,
        };
        self.orders.push(Order {
            id,
            symbol: spec.symbol,
            side: spec.side,
            kind: spec.kind,
            limit_price: spec.limit_price,
            stop_price: spec.stop_price,
            quantity: spec.quantity,
            original_quantity: spec.quantity,
            sequence,
            status,
        });
        Ok(id)
    }

    fn validate(spec: &OrderSpec) -> Result<(), OrderError> {
        if spec.quantity.is_zero() {
            return Err(OrderError::InvalidQuantity(
                "quantity must be positive".to_string(),
            ));
        }
        match spec.kind {
            OrderKind::Limit => {
                if spec.limit_price.is_none() {
                    return Err(OrderError::InvalidPrice(
                        "limit orders require a limit price".to_string(),
                    ));
                }
            }
            OrderKind::Stop => {
                if spec.stop_price.is_none() {
                    return Err(OrderError::InvalidPrice(
                        "stop orders require a stop price".to_string(),
                    ));
                }
            }
            OrderKind::Market => {}
        }
        Ok(())
    }

    /// Look up an order by id
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        let idx = id.as_u64().checked_sub(1)?;
        self.orders.get(idx as usize)
    }

    /// Look up an order by id, mutably
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        let idx = id.as_u64().checked_sub(1)?;
        self.orders.get_mut(idx as usize)
    }

    /// Number of records ever allocated
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the registry has allocated nothing yet
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
