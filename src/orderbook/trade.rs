//! Trade reports emitted by the matching loop

use super::order::{OrderId, Price, Quantity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One side's view of an execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInfo {
    /// Order this view belongs to
    pub order_id: OrderId,
    /// Order on the other side of the execution
    pub counterparty_id: OrderId,
    /// Price reported to this side: the counterparty's limit price
    pub price: Price,
    /// Executed quantity
    pub quantity: Quantity,
}

/// A single execution between the head bid and the head ask.
///
/// The bid view carries the ask's price and the ask view carries the bid's
/// price, so each side is reported at its counterparty's limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique within the book that produced it
    pub trade_id: Uuid,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    bid: TradeInfo,
    ask: TradeInfo,
}

/// Trades produced by one book operation, in execution order
pub type Trades = Vec<Trade>;

impl Trade {
    pub fn new(trade_id: Uuid, timestamp: u64, bid: TradeInfo, ask: TradeInfo) -> Self {
        Self {
            trade_id,
            timestamp,
            bid,
            ask,
        }
    }

    pub fn bid_trade(&self) -> &TradeInfo {
        &self.bid
    }

    pub fn ask_trade(&self) -> &TradeInfo {
        &self.ask
    }

    /// Executed quantity, identical on both views
    pub fn quantity(&self) -> Quantity {
        self.bid.quantity
    }
}
