//! Core OrderBook state and read-only queries

use super::level::{Handle, OrderNode};
use super::order::{Order, OrderId, Price, Side, Volume};
use super::side::BookSide;
use crate::utils::UuidGenerator;
use slab::Slab;
use std::collections::HashMap;
use tracing::trace;
use uuid::Uuid;

/// Limit order book for a single instrument.
///
/// Resting orders are owned by an arena. Each side keeps its price levels
/// ordered by price, and each level threads a FIFO queue through the arena.
/// `order_index` maps an order id to its arena handle, which is what makes
/// cancellation O(1) once the level is located.
///
/// Every mutating operation takes `&mut self` and leaves the book uncrossed
/// and fully cross-referenced before returning. Wrap the book in
/// [`SharedOrderBook`](super::SharedOrderBook) to share it between threads.
#[derive(Debug)]
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels, best = highest price
    pub(super) bids: BookSide,

    /// Ask side price levels, best = lowest price
    pub(super) asks: BookSide,

    /// Arena owning every resting order
    pub(super) orders: Slab<OrderNode>,

    /// Order id to arena handle, present iff the order is resting
    pub(super) order_index: HashMap<OrderId, Handle>,

    /// Arrival counter used for time priority between crossed orders
    pub(super) next_sequence: u64,

    /// Generator for unique trade IDs
    pub(super) trade_id_generator: UuidGenerator,

    /// The price of the most recent trade, if any
    pub(super) last_trade_price: Option<Price>,
}

impl OrderBook {
    /// Create a new order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self::with_capacity(symbol, 0)
    }

    /// Create a new order book with room for `capacity` resting orders
    pub fn with_capacity(symbol: &str, capacity: usize) -> Self {
        // Per-book namespace keeps trade ids from different books apart
        let namespace = Uuid::new_v4();
        trace!(
            "Order book {}: created with capacity {} and trade namespace {}",
            symbol, capacity, namespace
        );

        Self {
            symbol: symbol.to_string(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            orders: Slab::with_capacity(capacity),
            order_index: HashMap::with_capacity(capacity),
            next_sequence: 0,
            trade_id_generator: UuidGenerator::new(namespace),
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the best bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Get the spread (best ask - best bid).
    ///
    /// `None` if either side is empty or the difference does not fit a `Price`.
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => ask.checked_sub(bid),
            _ => None,
        }
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            // Computed in floating point so extreme prices cannot overflow
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Price of the most recent trade, taken from the order that arrived first
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Number of resting orders
    pub fn len(&self) -> usize {
        self.order_index.len()
    }

    /// True when no order is resting on either side
    pub fn is_empty(&self) -> bool {
        self.order_index.is_empty()
    }

    pub fn bid_level_count(&self) -> usize {
        self.bids.level_count()
    }

    pub fn ask_level_count(&self) -> usize {
        self.asks.level_count()
    }

    /// Whether an order with this id is currently resting
    pub fn contains_order(&self, order_id: OrderId) -> bool {
        self.order_index.contains_key(&order_id)
    }

    /// Get a copy of a resting order by ID
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        self.order_index
            .get(&order_id)
            .map(|&handle| self.orders[handle].order.clone())
    }

    /// Get all orders at a specific price level, oldest first
    pub fn orders_at_price(&self, price: Price, side: Side) -> Vec<Order> {
        trace!(
            "Order book {}: Getting orders at price {} for side {}",
            self.symbol, price, side
        );
        // An absent level simply has no orders
        match self.book_side(side).level(price) {
            Some(level) => level
                .iter(&self.orders)
                .map(|handle| self.orders[handle].order.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Get all resting orders, bids best-first then asks best-first
    pub fn get_all_orders(&self) -> Vec<Order> {
        trace!("Order book {}: Getting all orders", self.symbol);
        let mut result = Vec::with_capacity(self.len());
        // Bids first, each side walked best level first and FIFO within a level
        for book_side in [&self.bids, &self.asks] {
            for level in book_side.levels() {
                result.extend(
                    level
                        .iter(&self.orders)
                        .map(|handle| self.orders[handle].order.clone()),
                );
            }
        }
        result
    }

    /// Total remaining quantity resting on one side
    pub fn total_quantity(&self, side: Side) -> Volume {
        self.book_side(side)
            .levels()
            .map(|level| level.total_quantity())
            .sum()
    }
}
