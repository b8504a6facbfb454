//! Order book engine: resting order storage, price-time matching and depth views.

pub mod book;
mod error;
mod level;
mod matching;
mod modifications;
mod operations;
pub mod order;
mod private;
mod shared;
mod side;
mod snapshot;
pub mod trade;

pub use book::OrderBook;
pub use error::OrderBookError;
pub use order::{ModifyOrder, Order, OrderId, Price, Quantity, Side, TimeInForce, Volume};
pub use shared::SharedOrderBook;
pub use snapshot::{LevelInfo, OrderBookLevelInfos, OrderBookSnapshot};
pub use trade::{Trade, TradeInfo, Trades};
