//! Event structures for the matching engine
//!
//! Every mutating operation appends its events here in generation order;
//! the caller drains them in one take-all step. The queue never exposes a
//! cursor, so a drained batch is a finite, non-restartable sequence.

use serde::{Deserialize, Serialize};
use types::ids::Symbol;
use types::trade::Trade;

use crate::book::Quote;

/// Best-price change notification
///
/// Emitted when an operation moved the best price or its aggregate
/// quantity on either side. An emptied side carries None.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopOfBookEvent {
    pub symbol: Symbol,
    pub bid: Option<Quote>,
    pub ask: Option<Quote>,
}

/// An event produced by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineEvent {
    Trade(Trade),
    TopOfBook(TopOfBookEvent),
}

/// Single-consumer, append-only event buffer
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<EngineEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: EngineEvent) {
        self.events.push(event);
    }

    /// Take all pending events and clear the buffer
    pub fn drain(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of buffered events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
