//! Error types for the matching engine
//!
//! Validation failures are rejections carried in return values; they are
//! never panics. Unknown ids and unknown symbols are not errors at all
//! (bool / empty result at the call site).

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// The registry cannot allocate another order record
    #[error("Order id space exhausted")]
    CapacityExhausted,
}

/// Order validation and lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Quantity {quantity} exceeds maximum {max}")]
    QuantityLimit { quantity: String, max: String },

    #[error("Order not found: {order_id}")]
    NotFound { order_id: u64 },

    #[error("Order already in terminal state: {status}")]
    AlreadyTerminal { status: String },
}
