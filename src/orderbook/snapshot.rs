//! Aggregated depth views of the order book

use super::book::OrderBook;
use super::order::{Price, Volume};
use super::side::BookSide;
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregate resting quantity at one price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub price: Price,
    pub quantity: Volume,
}

/// Full depth of both sides, best price first on each
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookLevelInfos {
    bids: Vec<LevelInfo>,
    asks: Vec<LevelInfo>,
}

impl OrderBookLevelInfos {
    pub fn new(bids: Vec<LevelInfo>, asks: Vec<LevelInfo>) -> Self {
        Self { bids, asks }
    }

    /// Bid levels, highest price first
    pub fn bids(&self) -> &[LevelInfo] {
        &self.bids
    }

    /// Ask levels, lowest price first
    pub fn asks(&self) -> &[LevelInfo] {
        &self.asks
    }
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid levels, highest price first
    pub bids: Vec<LevelInfo>,

    /// Ask levels, lowest price first
    pub asks: Vec<LevelInfo>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and quantity
    pub fn best_bid(&self) -> Option<(Price, Volume)> {
        let bid = self.bids.first().map(|level| (level.price, level.quantity));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and quantity
    pub fn best_ask(&self) -> Option<(Price, Volume)> {
        let ask = self.asks.first().map(|level| (level.price, level.quantity));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid), `None` if it does not fit a `Price`
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => ask_price.checked_sub(bid_price),
            _ => None,
        }
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> Volume {
        self.bids.iter().map(|level| level.quantity).sum()
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> Volume {
        self.asks.iter().map(|level| level.quantity).sum()
    }

    /// Serialize the snapshot to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl OrderBook {
    /// Aggregate quantity per price on both sides, best first
    pub fn level_infos(&self) -> OrderBookLevelInfos {
        OrderBookLevelInfos::new(
            depth(&self.bids, usize::MAX),
            depth(&self.asks, usize::MAX),
        )
    }

    /// Create a snapshot of at most `levels` price levels per side
    pub fn create_snapshot(&self, levels: usize) -> OrderBookSnapshot {
        trace!(
            "Order book {}: creating snapshot with depth {}",
            self.symbol, levels
        );
        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids: depth(&self.bids, levels),
            asks: depth(&self.asks, levels),
        }
    }
}

fn depth(book_side: &BookSide, levels: usize) -> Vec<LevelInfo> {
    book_side
        .levels()
        .take(levels)
        .map(|level| LevelInfo {
            price: level.price(),
            quantity: level.total_quantity(),
        })
        .collect()
}
