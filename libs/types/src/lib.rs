//! Types library for the matching engine
//!
//! Core type definitions shared by the engine and any service built on it:
//! deterministic numerics, identifiers, the order lifecycle and trades.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId, Symbol)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Order lifecycle types
//! - `trade`: Trade execution types
//! - `errors`: Error taxonomy

pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
