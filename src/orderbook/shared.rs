//! Thread-safe handle around a single order book

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{ModifyOrder, Order, OrderId, Price};
use super::snapshot::{OrderBookLevelInfos, OrderBookSnapshot};
use super::trade::Trades;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, `Send + Sync` handle to one [`OrderBook`].
///
/// Each call holds one lock for its whole duration, so matching, index
/// updates and level removal are observed atomically by other threads.
#[derive(Debug, Clone)]
pub struct SharedOrderBook {
    inner: Arc<Mutex<OrderBook>>,
}

impl SharedOrderBook {
    pub fn new(book: OrderBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    pub fn submit(&self, order: Order) -> Result<Trades, OrderBookError> {
        self.inner.lock().submit(order)
    }

    pub fn cancel(&self, order_id: OrderId) -> Result<Order, OrderBookError> {
        self.inner.lock().cancel(order_id)
    }

    pub fn modify(&self, modify: ModifyOrder) -> Result<Trades, OrderBookError> {
        self.inner.lock().modify(modify)
    }

    pub fn level_infos(&self) -> OrderBookLevelInfos {
        self.inner.lock().level_infos()
    }

    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        self.inner.lock().create_snapshot(depth)
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.inner.lock().best_bid()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.inner.lock().best_ask()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run `f` with exclusive access to the book
    pub fn with_book<R>(&self, f: impl FnOnce(&mut OrderBook) -> R) -> R {
        let mut book = self.inner.lock();
        f(&mut *book)
    }
}

impl From<OrderBook> for SharedOrderBook {
    fn from(book: OrderBook) -> Self {
        Self::new(book)
    }
}
