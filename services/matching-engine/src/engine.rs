//! Matching engine core
//!
//! Main coordinator for order books, the registry and the event queue.
//! Every public operation is synchronous and takes `&mut self`; matching
//! is deterministic given the submission order. Instances are fully
//! independent and dropping one discards all book state without events.

use std::collections::HashMap;
use tracing::debug;
use types::errors::{EngineError, OrderError};
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderKind, OrderSpec, OrderStatus, Side};
use types::trade::Trade;

use crate::book::{Book, TopOfBook};
use crate::config::EngineConfig;
use crate::depth::DepthSnapshot;
use crate::events::{EngineEvent, EventQueue, TopOfBookEvent};
use crate::matching::crossing;
use crate::registry::OrderRegistry;

/// Main matching engine
pub struct MatchingEngine {
    /// Order books per symbol
    books: HashMap<Symbol, Book>,
    /// Order records, id and sequence allocation
    registry: OrderRegistry,
    /// Events since the last drain
    events: EventQueue,
    config: EngineConfig,
}

impl MatchingEngine {
    /// Create an engine with default limits
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with explicit limits
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            books: HashMap::new(),
            registry: OrderRegistry::new(),
            events: EventQueue::new(),
            config,
        }
    }

    /// Submit an order
    ///
    /// Validates the spec, crosses limit and market orders against the
    /// opposite side, parks stops, and fires any stops whose price was
    /// crossed by a resulting trade. Returns the order id on acceptance;
    /// a validation failure is the rejection, nothing is booked for it.
    pub fn submit(&mut self, spec: OrderSpec) -> Result<OrderId, EngineError> {
        if spec.quantity > self.config.max_order_quantity {
            return Err(OrderError::QuantityLimit {
                quantity: spec.quantity.to_string(),
                max: self.config.max_order_quantity.to_string(),
            }
            .into());
        }

        let symbol = spec.symbol.clone();
        let kind = spec.kind;
        let order_id = self.registry.allocate(spec)?;
        debug!(%symbol, %order_id, ?kind, "order accepted");

        let book = self
            .books
            .entry(symbol.clone())
            .or_insert_with(|| Book::new(symbol));
        let before = book.top_of_book();

        match kind {
            OrderKind::Stop => book.stops.push(order_id),
            OrderKind::Limit | OrderKind::Market => {
                let mut trade_prices =
                    Self::cross(book, &mut self.registry, &mut self.events, order_id);
                Self::fire_stops(book, &mut self.registry, &mut self.events, &mut trade_prices);
            }
        }

        Self::emit_top_of_book(book, &mut self.events, before);
        Ok(order_id)
    }

    /// Cancel an order
    ///
    /// Returns false for unknown or already-terminal ids; never an error.
    pub fn cancel(&mut self, order_id: OrderId) -> bool {
        let Some(order) = self.registry.get(order_id) else {
            return false;
        };
        if order.status.is_terminal() {
            return false;
        }
        let (symbol, side, status, limit_price, remaining) = (
            order.symbol.clone(),
            order.side,
            order.status,
            order.limit_price,
            order.quantity,
        );

        let Some(book) = self.books.get_mut(&symbol) else {
            return false;
        };
        let before = book.top_of_book();

        if status == OrderStatus::PendingTrigger {
            book.stops.retain(|&id| id != order_id);
        } else if let Some(price) = limit_price {
            book.remove(side, order_id, price, remaining);
        }

        if let Some(order) = self.registry.get_mut(order_id) {
            order.status = OrderStatus::Cancelled;
        }
        debug!(%symbol, %order_id, "order cancelled");

        Self::emit_top_of_book(book, &mut self.events, before);
        true
    }

    /// Modify an order's price and/or quantity
    ///
    /// None leaves a field unchanged. Reducing quantity at an unchanged
    /// price keeps the order's level position and sequence; a price change
    /// or quantity increase is cancel-then-resubmit: the order re-enters
    /// the crossing path with a fresh sequence, behind earlier arrivals at
    /// its new level. An explicit zero quantity cancels. Returns false for
    /// unknown or terminal ids.
    pub fn modify(
        &mut self,
        order_id: OrderId,
        new_price: Option<Price>,
        new_quantity: Option<Quantity>,
    ) -> bool {
        let Some(order) = self.registry.get(order_id) else {
            return false;
        };
        if order.status.is_terminal() {
            return false;
        }
        let (status, symbol, side, current_price, remaining, filled) = (
            order.status,
            order.symbol.clone(),
            order.side,
            order.limit_price,
            order.quantity,
            order.filled_quantity(),
        );

        if new_quantity.is_some_and(|quantity| quantity.is_zero()) {
            return self.cancel(order_id);
        }

        if status == OrderStatus::PendingTrigger {
            return self.modify_pending_stop(order_id, new_price, new_quantity);
        }
        // non-terminal booked orders always carry a limit price
        let Some(current_price) = current_price else {
            return false;
        };
        let Some(book) = self.books.get_mut(&symbol) else {
            return false;
        };
        let before = book.top_of_book();

        let target_price = new_price.unwrap_or(current_price);
        let target_quantity = new_quantity.unwrap_or(remaining);

        if target_price == current_price && target_quantity <= remaining {
            let delta = remaining - target_quantity;
            if !delta.is_zero() {
                match side {
                    Side::Buy => book.bids.reduce(current_price, delta),
                    Side::Sell => book.asks.reduce(current_price, delta),
                }
                if let Some(order) = self.registry.get_mut(order_id) {
                    order.quantity = target_quantity;
                    order.original_quantity = filled + target_quantity;
                }
                debug!(%symbol, %order_id, quantity = %target_quantity, "order reduced in place");
            }
            Self::emit_top_of_book(book, &mut self.events, before);
            return true;
        }

        book.remove(side, order_id, current_price, remaining);
        if let Some(order) = self.registry.get_mut(order_id) {
            order.limit_price = Some(target_price);
            order.quantity = target_quantity;
            order.original_quantity = filled + target_quantity;
        }
        debug!(%symbol, %order_id, price = %target_price, quantity = %target_quantity,
               "order re-entering book");

        let mut trade_prices = Self::cross(book, &mut self.registry, &mut self.events, order_id);
        Self::fire_stops(book, &mut self.registry, &mut self.events, &mut trade_prices);
        Self::emit_top_of_book(book, &mut self.events, before);
        true
    }

    /// Take all events generated since the previous drain, oldest first
    ///
    /// Idempotent when nothing happened: returns an empty sequence.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain()
    }

    /// Aggregated top-N depth per side, best first
    ///
    /// An unknown symbol yields two empty sides, not an error.
    pub fn depth(&self, symbol: &Symbol, levels: usize) -> DepthSnapshot {
        match self.books.get(symbol) {
            Some(book) => DepthSnapshot {
                symbol: symbol.clone(),
                bids: book.bids.depth_snapshot(levels),
                asks: book.asks.depth_snapshot(levels),
            },
            None => DepthSnapshot::empty(symbol.clone()),
        }
    }

    /// Look up an order record by id
    pub fn order(&self, order_id: OrderId) -> Option<&Order> {
        self.registry.get(order_id)
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn modify_pending_stop(
        &mut self,
        order_id: OrderId,
        new_price: Option<Price>,
        new_quantity: Option<Quantity>,
    ) -> bool {
        let Some(order) = self.registry.get_mut(order_id) else {
            return false;
        };
        if let Some(price) = new_price {
            order.stop_price = Some(price);
        }
        if let Some(quantity) = new_quantity {
            order.quantity = quantity;
            order.original_quantity = quantity;
        }
        debug!(order_id = %order_id, "pending stop rewritten");
        true
    }

    /// Cross a taker against the opposite side until it stops being
    /// marketable or runs out of quantity, then rest or discard the
    /// remainder. Returns the executed trade prices for stop triggering.
    fn cross(
        book: &mut Book,
        registry: &mut OrderRegistry,
        events: &mut EventQueue,
        taker_id: OrderId,
    ) -> Vec<Price> {
        let (side, limit_price, symbol) = {
            let order = registry.get(taker_id).expect("taker must be registered");
            (order.side, order.limit_price, order.symbol.clone())
        };
        let mut trade_prices = Vec::new();

        loop {
            let remaining = registry
                .get(taker_id)
                .expect("taker must be registered")
                .quantity;
            if remaining.is_zero() {
                break;
            }

            let best = match side {
                Side::Buy => book.asks.best(),
                Side::Sell => book.bids.best(),
            };
            let Some((resting_price, _)) = best else {
                break;
            };
            if !crossing::marketable(side, limit_price, resting_price) {
                break;
            }

            let front = {
                let level = match side {
                    Side::Buy => book.asks.best_level_mut(),
                    Side::Sell => book.bids.best_level_mut(),
                };
                level.expect("best level must exist").1.front()
            };
            let Some(maker_id) = front else {
                match side {
                    Side::Buy => book.asks.remove_level(resting_price),
                    Side::Sell => book.bids.remove_level(resting_price),
                }
                continue;
            };

            let maker_quantity = registry
                .get(maker_id)
                .expect("resting order must be registered")
                .quantity;
            let fill = remaining.min(maker_quantity);

            registry
                .get_mut(maker_id)
                .expect("resting order must be registered")
                .apply_fill(fill);
            registry
                .get_mut(taker_id)
                .expect("taker must be registered")
                .apply_fill(fill);

            let level_empty = {
                let (_, level) = match side {
                    Side::Buy => book.asks.best_level_mut(),
                    Side::Sell => book.bids.best_level_mut(),
                }
                .expect("best level must exist");
                if fill == maker_quantity {
                    level.pop_front(maker_quantity);
                } else {
                    level.reduce(fill);
                }
                level.is_empty()
            };
            if level_empty {
                match side {
                    Side::Buy => book.asks.remove_level(resting_price),
                    Side::Sell => book.bids.remove_level(resting_price),
                }
            }

            let (buy_order_id, sell_order_id) = match side {
                Side::Buy => (taker_id, maker_id),
                Side::Sell => (maker_id, taker_id),
            };
            let trade = Trade {
                sequence: registry.next_sequence(),
                symbol: symbol.clone(),
                buy_order_id,
                sell_order_id,
                taker_side: side,
                price: resting_price,
                quantity: fill,
            };
            debug!(%symbol, buy = %buy_order_id, sell = %sell_order_id,
                   price = %resting_price, quantity = %fill, "trade executed");
            trade_prices.push(resting_price);
            events.push(EngineEvent::Trade(trade));
        }

        let (remaining, limit) = {
            let order = registry.get(taker_id).expect("taker must be registered");
            (order.quantity, order.limit_price)
        };
        if !remaining.is_zero() {
            match limit {
                Some(price) => {
                    // rests with a fresh sequence, behind existing arrivals
                    let sequence = registry.next_sequence();
                    let order = registry.get_mut(taker_id).expect("taker must be registered");
                    order.sequence = sequence;
                    book.insert(side, taker_id, price, remaining);
                }
                None => {
                    // market orders never rest; the remainder is discarded
                    let order = registry.get_mut(taker_id).expect("taker must be registered");
                    order.status = OrderStatus::Cancelled;
                    debug!(%symbol, %taker_id, remainder = %remaining,
                           "discarding unfilled market remainder");
                }
            }
        }
        trade_prices
    }

    /// Fire pending stops whose price was crossed by an executed trade,
    /// cascading to fixpoint: trades from a triggered stop are themselves
    /// checked against the remaining stops.
    fn fire_stops(
        book: &mut Book,
        registry: &mut OrderRegistry,
        events: &mut EventQueue,
        trade_prices: &mut Vec<Price>,
    ) {
        let mut next = 0;
        while next < trade_prices.len() {
            let trade_price = trade_prices[next];
            next += 1;

            let triggered: Vec<OrderId> = book
                .stops
                .iter()
                .copied()
                .filter(|id| {
                    registry.get(*id).is_some_and(|order| {
                        order.status == OrderStatus::PendingTrigger
                            && order.stop_price.is_some_and(|stop| {
                                crossing::stop_triggered(order.side, stop, trade_price)
                            })
                    })
                })
                .collect();
            if triggered.is_empty() {
                continue;
            }
            book.stops.retain(|id| !triggered.contains(id));

            for order_id in triggered {
                let order = registry
                    .get_mut(order_id)
                    .expect("pending stop must be registered");
                order.status = OrderStatus::Active;
                debug!(%order_id, %trade_price, "stop order triggered");
                let mut cascade = Self::cross(book, registry, events, order_id);
                trade_prices.append(&mut cascade);
            }
        }
    }

    /// Emit one TopOfBook event if either best level changed
    fn emit_top_of_book(book: &Book, events: &mut EventQueue, before: TopOfBook) {
        let after = book.top_of_book();
        if after != before {
            let (bid, ask) = after;
            events.push(EngineEvent::TopOfBook(TopOfBookEvent {
                symbol: book.symbol().clone(),
                bid,
                ask,
            }));
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        Symbol::new("AAPL")
    }

    fn limit(side: Side, price: u64, quantity: u64) -> OrderSpec {
        OrderSpec::limit(
            symbol(),
            side,
            Price::from_u64(price),
            Quantity::from_u64(quantity),
        )
    }

    fn market(side: Side, quantity: u64) -> OrderSpec {
        OrderSpec::market(symbol(), side, Quantity::from_u64(quantity))
    }

    fn trades(events: &[EngineEvent]) -> Vec<&Trade> {
        events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Trade(trade) => Some(trade),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_resting_order_no_trade() {
        let mut engine = MatchingEngine::new();
        let id = engine.submit(limit(Side::Buy, 150, 10)).unwrap();

        let events = engine.drain_events();
        assert!(trades(&events).is_empty());
        assert_eq!(engine.order(id).unwrap().status, OrderStatus::Active);
        assert_eq!(
            engine.depth(&symbol(), 1).bids,
            vec![(Price::from_u64(150), Quantity::from_u64(10))]
        );
    }

    #[test]
    fn test_full_match_at_resting_price() {
        let mut engine = MatchingEngine::new();
        let sell = engine.submit(limit(Side::Sell, 149, 10)).unwrap();
        engine.drain_events();
        let buy = engine.submit(limit(Side::Buy, 150, 10)).unwrap();

        let events = engine.drain_events();
        let fills = trades(&events);
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].price, Price::from_u64(149));
        assert_eq!(fills[0].quantity, Quantity::from_u64(10));
        assert_eq!(fills[0].buy_order_id, buy);
        assert_eq!(fills[0].sell_order_id, sell);
        assert_eq!(fills[0].taker_side, Side::Buy);

        assert_eq!(engine.order(buy).unwrap().status, OrderStatus::Filled);
        assert_eq!(engine.order(sell).unwrap().status, OrderStatus::Filled);
        assert!(engine.depth(&symbol(), 5).is_empty());
    }

    #[test]
    fn test_partial_fill_rests_remainder() {
        let mut engine = MatchingEngine::new();
        engine.submit(limit(Side::Sell, 150, 4)).unwrap();
        let buy = engine.submit(limit(Side::Buy, 150, 10)).unwrap();

        assert_eq!(
            engine.order(buy).unwrap().status,
            OrderStatus::PartiallyFilled
        );
        assert_eq!(engine.order(buy).unwrap().quantity, Quantity::from_u64(6));
        assert_eq!(
            engine.depth(&symbol(), 1).bids,
            vec![(Price::from_u64(150), Quantity::from_u64(6))]
        );
    }

    #[test]
    fn test_no_cross_when_spread() {
        let mut engine = MatchingEngine::new();
        engine.submit(limit(Side::Buy, 149, 100)).unwrap();
        engine.submit(limit(Side::Sell, 151, 100)).unwrap();

        let events = engine.drain_events();
        assert!(trades(&events).is_empty());
    }

    #[test]
    fn test_market_sweeps_multiple_levels() {
        let mut engine = MatchingEngine::new();
        engine.submit(limit(Side::Sell, 150, 5)).unwrap();
        engine.submit(limit(Side::Sell, 151, 5)).unwrap();
        let buy = engine.submit(market(Side::Buy, 8)).unwrap();

        let events = engine.drain_events();
        let fills = trades(&events);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].price, Price::from_u64(150));
        assert_eq!(fills[0].quantity, Quantity::from_u64(5));
        assert_eq!(fills[1].price, Price::from_u64(151));
        assert_eq!(fills[1].quantity, Quantity::from_u64(3));

        assert_eq!(engine.order(buy).unwrap().status, OrderStatus::Filled);
        assert_eq!(
            engine.depth(&symbol(), 5).asks,
            vec![(Price::from_u64(151), Quantity::from_u64(2))]
        );
    }

    #[test]
    fn test_market_remainder_discarded() {
        let mut engine = MatchingEngine::new();
        engine.submit(limit(Side::Sell, 150, 5)).unwrap();
        let buy = engine.submit(market(Side::Buy, 9)).unwrap();

        let order = engine.order(buy).unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.quantity, Quantity::from_u64(4));
        assert!(engine.depth(&symbol(), 5).bids.is_empty());
    }

    #[test]
    fn test_market_no_liquidity_never_rests() {
        let mut engine = MatchingEngine::new();
        let buy = engine.submit(market(Side::Buy, 50)).unwrap();

        assert_eq!(engine.order(buy).unwrap().status, OrderStatus::Cancelled);
        assert!(engine.depth(&symbol(), 5).is_empty());
        assert!(trades(&engine.drain_events()).is_empty());
    }

    #[test]
    fn test_oversized_order_rejected() {
        let mut engine = MatchingEngine::with_config(EngineConfig {
            max_order_quantity: Quantity::from_u64(99),
        });
        let err = engine.submit(limit(Side::Buy, 150, 100)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Order(OrderError::QuantityLimit { .. })
        ));
        assert!(engine.submit(limit(Side::Buy, 150, 99)).is_ok());
    }

    #[test]
    fn test_cancel_unknown_and_terminal() {
        let mut engine = MatchingEngine::new();
        assert!(!engine.cancel(OrderId::from_u64(12345)));

        let id = engine.submit(limit(Side::Buy, 150, 10)).unwrap();
        assert!(engine.cancel(id));
        assert!(!engine.cancel(id));
        assert_eq!(engine.order(id).unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_cancel_removes_from_book() {
        let mut engine = MatchingEngine::new();
        let id = engine.submit(limit(Side::Buy, 150, 10)).unwrap();
        engine.cancel(id);
        assert!(engine.depth(&symbol(), 5).bids.is_empty());
    }

    #[test]
    fn test_modify_unknown_returns_false() {
        let mut engine = MatchingEngine::new();
        assert!(!engine.modify(
            OrderId::from_u64(67890),
            Some(Price::from_u64(100)),
            Some(Quantity::from_u64(10))
        ));
    }

    #[test]
    fn test_modify_reduce_keeps_priority() {
        let mut engine = MatchingEngine::new();
        let first = engine.submit(limit(Side::Buy, 150, 10)).unwrap();
        let second = engine.submit(limit(Side::Buy, 150, 10)).unwrap();

        assert!(engine.modify(first, None, Some(Quantity::from_u64(4))));
        let first_seq = engine.order(first).unwrap().sequence;
        let second_seq = engine.order(second).unwrap().sequence;
        assert!(first_seq < second_seq);

        // first still fills first at its reduced size
        engine.submit(limit(Side::Sell, 150, 4)).unwrap();
        assert_eq!(engine.order(first).unwrap().status, OrderStatus::Filled);
        assert_eq!(engine.order(second).unwrap().status, OrderStatus::Active);
    }

    #[test]
    fn test_modify_price_change_loses_priority() {
        let mut engine = MatchingEngine::new();
        let moved = engine.submit(limit(Side::Buy, 149, 10)).unwrap();
        let incumbent = engine.submit(limit(Side::Buy, 150, 10)).unwrap();

        assert!(engine.modify(moved, Some(Price::from_u64(150)), None));
        assert!(
            engine.order(moved).unwrap().sequence > engine.order(incumbent).unwrap().sequence
        );

        // incumbent fills first despite arriving after the moved order
        engine.submit(limit(Side::Sell, 150, 10)).unwrap();
        assert_eq!(engine.order(incumbent).unwrap().status, OrderStatus::Filled);
        assert_eq!(engine.order(moved).unwrap().status, OrderStatus::Active);
    }

    #[test]
    fn test_modify_crossing_price_triggers_rematch() {
        let mut engine = MatchingEngine::new();
        let bid = engine.submit(limit(Side::Buy, 149, 50)).unwrap();
        engine.submit(limit(Side::Sell, 151, 50)).unwrap();
        engine.drain_events();

        assert!(engine.modify(bid, Some(Price::from_u64(152)), None));
        let events = engine.drain_events();
        let fills = trades(&events);
        assert_eq!(fills.len(), 1);
        // executes at the resting ask's price
        assert_eq!(fills[0].price, Price::from_u64(151));
        assert_eq!(engine.order(bid).unwrap().status, OrderStatus::Filled);
    }

    #[test]
    fn test_modify_to_zero_quantity_cancels() {
        let mut engine = MatchingEngine::new();
        let id = engine.submit(limit(Side::Buy, 100, 20)).unwrap();

        assert!(engine.modify(id, None, Some(Quantity::zero())));
        assert_eq!(engine.order(id).unwrap().status, OrderStatus::Cancelled);
        assert!(engine.depth(&symbol(), 5).bids.is_empty());
    }

    #[test]
    fn test_multi_symbol_routing_independent() {
        let mut engine = MatchingEngine::new();
        engine
            .submit(OrderSpec::limit(
                Symbol::new("AAPL"),
                Side::Buy,
                Price::from_u64(100),
                Quantity::from_u64(10),
            ))
            .unwrap();
        engine
            .submit(OrderSpec::limit(
                Symbol::new("MSFT"),
                Side::Sell,
                Price::from_u64(100),
                Quantity::from_u64(10),
            ))
            .unwrap();

        // same price, different books: no trade
        assert!(trades(&engine.drain_events()).is_empty());
        assert_eq!(engine.depth(&Symbol::new("AAPL"), 5).bids.len(), 1);
        assert_eq!(engine.depth(&Symbol::new("MSFT"), 5).asks.len(), 1);
    }

    #[test]
    fn test_depth_unknown_symbol_empty() {
        let engine = MatchingEngine::new();
        let snapshot = engine.depth(&Symbol::new("NOPE"), 5);
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_stop_parks_until_triggered() {
        let mut engine = MatchingEngine::new();
        let stop = engine
            .submit(OrderSpec::stop(
                symbol(),
                Side::Buy,
                Price::from_u64(151),
                Quantity::from_u64(5),
            ))
            .unwrap();
        assert_eq!(
            engine.order(stop).unwrap().status,
            OrderStatus::PendingTrigger
        );
        // not in either ladder
        assert!(engine.depth(&symbol(), 5).is_empty());

        // a trade at 151 fires the buy stop, which sweeps the remaining ask
        engine.submit(limit(Side::Sell, 151, 8)).unwrap();
        engine.submit(limit(Side::Buy, 151, 3)).unwrap();

        let events = engine.drain_events();
        let fills = trades(&events);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[1].buy_order_id, stop);
        assert_eq!(fills[1].quantity, Quantity::from_u64(5));
        assert_eq!(engine.order(stop).unwrap().status, OrderStatus::Filled);
    }

    #[test]
    fn test_stop_not_triggered_below_stop_price() {
        let mut engine = MatchingEngine::new();
        let stop = engine
            .submit(OrderSpec::stop(
                symbol(),
                Side::Buy,
                Price::from_u64(155),
                Quantity::from_u64(5),
            ))
            .unwrap();

        engine.submit(limit(Side::Sell, 151, 3)).unwrap();
        engine.submit(limit(Side::Buy, 151, 3)).unwrap();

        assert_eq!(
            engine.order(stop).unwrap().status,
            OrderStatus::PendingTrigger
        );
    }

    #[test]
    fn test_sell_stop_triggers_on_falling_trade() {
        let mut engine = MatchingEngine::new();
        let stop = engine
            .submit(OrderSpec::stop(
                symbol(),
                Side::Sell,
                Price::from_u64(149),
                Quantity::from_u64(5),
            ))
            .unwrap();
        // resting bid for the stop to hit once it fires
        engine.submit(limit(Side::Buy, 148, 10)).unwrap();
        engine.submit(limit(Side::Buy, 149, 2)).unwrap();

        // trade at 149 fires the sell stop
        engine.submit(limit(Side::Sell, 149, 2)).unwrap();

        let order = engine.order(stop).unwrap();
        assert_eq!(order.status, OrderStatus::Filled);
    }

    #[test]
    fn test_cancel_pending_stop() {
        let mut engine = MatchingEngine::new();
        let stop = engine
            .submit(OrderSpec::stop(
                symbol(),
                Side::Buy,
                Price::from_u64(151),
                Quantity::from_u64(5),
            ))
            .unwrap();

        assert!(engine.cancel(stop));
        assert_eq!(engine.order(stop).unwrap().status, OrderStatus::Cancelled);

        // a later trade at the stop price must not fire it
        engine.submit(limit(Side::Sell, 151, 3)).unwrap();
        engine.submit(limit(Side::Buy, 151, 3)).unwrap();
        assert_eq!(engine.order(stop).unwrap().status, OrderStatus::Cancelled);
    }
}
