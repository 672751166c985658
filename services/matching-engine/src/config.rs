//! Engine configuration

use serde::{Deserialize, Serialize};
use types::numeric::Quantity;

/// Tunable limits for one engine instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Submissions above this quantity are rejected
    pub max_order_quantity: Quantity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_order_quantity: Quantity::from_u64(1_000_000),
        }
    }
}
