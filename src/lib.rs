//! # Limit Order Book Matching Engine
//!
//! A single-instrument limit order book with continuous double-auction
//! matching under price-time priority. Orders are submitted, cancelled or
//! modified; every call runs to completion and returns the trades it
//! produced.
//!
//! ## Key Features
//!
//! - **Price-Time Priority**: the best price trades first; orders at the same
//!   price trade in arrival order.
//!
//! - **O(1) Cancellation**: resting orders live in an arena and every price
//!   level threads its FIFO queue through it, so an order is unlinked from its
//!   level through a stored handle without scanning.
//!
//! - **Incremental Price Levels**: levels are created on the first order at a
//!   price and dropped as soon as the last one leaves. Each level keeps its
//!   aggregate quantity up to date, so depth queries never walk orders.
//!
//! - **Time In Force**: good-till-cancel orders rest until filled or
//!   cancelled. Immediate-or-cancel orders are admitted only when the
//!   opposite side already offers a price they accept, and never rest once
//!   their matching pass is over.
//!
//! - **Explicit Errors**: cancelling or modifying an unknown order returns
//!   [`OrderBookError::OrderNotFound`]. Duplicate submissions and unmatched
//!   immediate-or-cancel orders are silent no-ops.
//!
//! ## Trade Reporting
//!
//! Each [`Trade`] pairs a bid-side and an ask-side [`TradeInfo`]. Each view
//! carries its own order id, the counterparty's id, the executed quantity
//! and the counterparty's limit price.
//!
//! ## Concurrency
//!
//! [`OrderBook`] is a plain single-threaded structure: mutating calls take
//! `&mut self`. [`SharedOrderBook`] puts one book behind a mutex so several
//! threads can submit and cancel without observing a half-applied match.
//!
//! ## Example
//!
//! ```rust
//! use lob_engine::{Order, OrderBook, Side};
//!
//! let mut book = OrderBook::new("TEST");
//! book.submit(Order::gtc(1, Side::Buy, 100, 100)).unwrap();
//! let trades = book.submit(Order::gtc(2, Side::Sell, 100, 50)).unwrap();
//!
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].quantity(), 50);
//! assert_eq!(book.get_order(1).unwrap().remaining_quantity(), 50);
//! assert!(book.get_order(2).is_none());
//! ```

pub mod orderbook;

mod utils;

pub use orderbook::{
    LevelInfo, ModifyOrder, Order, OrderBook, OrderBookError, OrderBookLevelInfos,
    OrderBookSnapshot, OrderId, Price, Quantity, SharedOrderBook, Side, TimeInForce, Trade,
    TradeInfo, Trades, Volume,
};
pub use utils::{UuidGenerator, current_time_millis};
