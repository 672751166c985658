//! Identifier types for engine entities
//!
//! Order ids are dense monotonic integers assigned by the registry at
//! submission, which keeps them usable as arena indices and lets the
//! foreign boundary reserve non-positive values for rejection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum byte length of a symbol, fixed by the boundary contract.
pub const MAX_SYMBOL_LEN: usize = 16;

/// Unique identifier for an order
///
/// Assigned monotonically starting at 1 and never reused. Ordering follows
/// assignment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create from a raw id value
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument symbol
///
/// Non-empty byte string of at most [`MAX_SYMBOL_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol
    ///
    /// # Panics
    /// Panics if the symbol is empty or longer than [`MAX_SYMBOL_LEN`] bytes.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::try_new(symbol).expect("symbol must be 1..=16 bytes")
    }

    /// Try to create a Symbol, returning None if malformed
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s = symbol.into();
        if s.is_empty() || s.len() > MAX_SYMBOL_LEN {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
