//! Structural helpers shared by insertion, matching and cancellation

use super::book::OrderBook;
use super::level::{Handle, OrderNode};
use super::order::{Order, Side};
use super::side::BookSide;
use tracing::trace;

impl OrderBook {
    pub(super) fn book_side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Places a resting order at the tail of its price level and indexes it.
    pub(super) fn place_order_in_book(&mut self, order: Order) -> Handle {
        let (order_id, side, price) = (order.id(), order.side(), order.price());
        // The arena slot is the order's handle for its whole resting life
        let handle = self.orders.insert(OrderNode::new(order, self.next_sequence));
        self.next_sequence += 1;

        let book_side = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        // Get or create the price level
        let level = book_side.level_entry(price);
        level.push_back(&mut self.orders, handle);
        let queued = level.order_count();
        self.order_index.insert(order_id, handle);

        trace!(
            "Order book {}: placed order {} at {} {} (handle {}, {} queued)",
            self.symbol, order_id, side, price, handle, queued
        );
        handle
    }

    /// Removes the order at `handle` from its level, the index and the arena.
    ///
    /// The level is dropped from its side when this was its last order.
    /// Used both for fully filled orders and for cancellations.
    pub(super) fn remove_order(&mut self, handle: Handle) -> Order {
        let (order_id, side, price) = {
            let order = &self.orders[handle].order;
            (order.id(), order.side(), order.price())
        };

        let book_side = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        // Unlink first: the level subtracts the quantity still open on the node
        if let Some(level) = book_side.level_mut(price) {
            level.unlink(&mut self.orders, handle);
            if level.is_empty() {
                book_side.remove_level(price);
                trace!(
                    "Order book {}: removed empty {} level {}",
                    self.symbol, side, price
                );
            }
        }

        // Index entry and arena slot are released together
        self.order_index.remove(&order_id);
        self.orders.remove(handle).order
    }
}
