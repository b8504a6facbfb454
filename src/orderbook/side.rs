//! One side of the book: price levels ordered by price.

use super::level::PriceLevel;
use super::order::{Price, Side};
use std::collections::BTreeMap;

/// Price levels for bids or asks.
///
/// Levels are kept in a `BTreeMap` in ascending price order; "best" is the
/// highest key on the bid side and the lowest key on the ask side.
#[derive(Debug, Clone)]
pub(crate) struct BookSide {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl BookSide {
    pub(crate) fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    pub(crate) fn best_level(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values().next_back(),
            Side::Sell => self.levels.values().next(),
        }
    }

    pub(crate) fn level(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub(crate) fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Get or create the level at `price`
    pub(crate) fn level_entry(&mut self, price: Price) -> &mut PriceLevel {
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
    }

    pub(crate) fn remove_level(&mut self, price: Price) -> Option<PriceLevel> {
        self.levels.remove(&price)
    }

    /// Levels best-first
    pub(crate) fn levels(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }
}
