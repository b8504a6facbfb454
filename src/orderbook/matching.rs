//! Contains the core matching engine logic for the order book.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::level::Handle;
use super::order::{Order, Price, Quantity, Side};
use super::trade::{Trade, TradeInfo, Trades};
use crate::utils::current_time_millis;
use tracing::{debug, trace};

impl OrderBook {
    /// Check whether an order at `price` on `side` would find a counterparty
    /// at the current top of the opposite side.
    pub fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self.best_ask().is_some_and(|best_ask| price >= best_ask),
            Side::Sell => self.best_bid().is_some_and(|best_bid| price <= best_bid),
        }
    }

    /// Match the best bid level against the best ask level until the book is
    /// uncrossed or one side is empty.
    ///
    /// Within a pair of levels, head orders trade in arrival order. Filled
    /// orders and emptied levels are removed as they occur. Each time a level
    /// pair stops trading, an unfilled immediate-or-cancel order at the head
    /// of either side is cancelled.
    pub(super) fn match_orders(&mut self) -> Result<Trades, OrderBookError> {
        let mut trades = Trades::new();

        while let (Some(bid_price), Some(ask_price)) = (self.best_bid(), self.best_ask()) {
            // Uncrossed, nothing left to match
            if bid_price < ask_price {
                break;
            }

            // Trade the two best levels until one of them runs out
            while let Some((bid_handle, ask_handle)) = self.level_heads(bid_price, ask_price) {
                trades.push(self.execute(bid_handle, ask_handle)?);
            }

            // Immediate orders must not survive past this level pair
            for side in [Side::Buy, Side::Sell] {
                if let Some(order) = self.cancel_unfilled_immediate_head(side) {
                    debug!(
                        "Order book {}: discarded remaining {} of immediate order {}",
                        self.symbol,
                        order.remaining_quantity(),
                        order.id()
                    );
                }
            }
        }

        Ok(trades)
    }

    /// Head orders of the bid level at `bid_price` and the ask level at
    /// `ask_price`, while both levels still exist
    fn level_heads(&self, bid_price: Price, ask_price: Price) -> Option<(Handle, Handle)> {
        let bid_head = self.bids.level(bid_price)?.front()?;
        let ask_head = self.asks.level(ask_price)?.front()?;
        Some((bid_head, ask_head))
    }

    /// Trade the two head orders against each other for the smaller of their
    /// remaining quantities.
    fn execute(
        &mut self,
        bid_handle: Handle,
        ask_handle: Handle,
    ) -> Result<Trade, OrderBookError> {
        // The smaller side is exhausted by this trade
        let quantity: Quantity = self.orders[bid_handle]
            .order
            .remaining_quantity()
            .min(self.orders[ask_handle].order.remaining_quantity());

        self.orders[bid_handle].order.fill(quantity)?;
        self.orders[ask_handle].order.fill(quantity)?;

        // Copy out what the trade report needs before touching the levels
        let bid = &self.orders[bid_handle];
        let (bid_id, bid_price, bid_sequence) = (bid.order.id(), bid.order.price(), bid.sequence);
        let ask = &self.orders[ask_handle];
        let (ask_id, ask_price, ask_sequence) = (ask.order.id(), ask.order.price(), ask.sequence);

        // Keep level aggregates in step with the fills
        if let Some(level) = self.bids.level_mut(bid_price) {
            level.record_fill(quantity);
        }
        if let Some(level) = self.asks.level_mut(ask_price) {
            level.record_fill(quantity);
        }

        // Each view is priced at its counterparty's limit
        let trade = Trade::new(
            self.trade_id_generator.next_id(),
            current_time_millis(),
            TradeInfo {
                order_id: bid_id,
                counterparty_id: ask_id,
                price: ask_price,
                quantity,
            },
            TradeInfo {
                order_id: ask_id,
                counterparty_id: bid_id,
                price: bid_price,
                quantity,
            },
        );

        // The order that arrived first was resting; its limit is the print
        self.last_trade_price = Some(if bid_sequence < ask_sequence {
            bid_price
        } else {
            ask_price
        });

        trace!(
            "Order book {}: trade {} bid {} ask {} qty {} (bid px {}, ask px {})",
            self.symbol, trade.trade_id, bid_id, ask_id, quantity, bid_price, ask_price
        );

        // Filled orders leave the book now; their levels go with them if emptied
        if self.orders[bid_handle].order.is_filled() {
            self.remove_order(bid_handle);
        }
        if self.orders[ask_handle].order.is_filled() {
            self.remove_order(ask_handle);
        }

        Ok(trade)
    }

    /// Cancel the head order of the best level on `side` if it is an
    /// immediate-or-cancel order with quantity left.
    fn cancel_unfilled_immediate_head(&mut self, side: Side) -> Option<Order> {
        let handle = self.book_side(side).best_level()?.front()?;
        let order = &self.orders[handle].order;
        if order.time_in_force().is_immediate() && !order.is_filled() {
            Some(self.remove_order(handle))
        } else {
            None
        }
    }
}
