//! Order book operations: submitting and cancelling orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, Price, Quantity, Side, TimeInForce};
use super::trade::Trades;
use tracing::{debug, trace};

impl OrderBook {
    /// Submit a new order and match it against the book.
    ///
    /// Returns the trades produced, oldest first. Two cases are silent
    /// no-ops that return no trades and leave the book untouched:
    ///
    /// * an order with the same id is already resting, whatever its quantity;
    /// * an immediate-or-cancel order whose limit does not reach the best
    ///   price on the opposite side.
    ///
    /// A new id with zero quantity fails with
    /// [`OrderBookError::InvalidQuantity`].
    ///
    /// Otherwise the order joins the tail of its price level and the book is
    /// matched until it is uncrossed. An immediate-or-cancel order never rests
    /// once this returns.
    pub fn submit(&mut self, order: Order) -> Result<Trades, OrderBookError> {
        trace!("Order book {}: Submitting order {}", self.symbol, order);

        // A resting id wins over any other check on the new order
        if self.order_index.contains_key(&order.id()) {
            debug!(
                "Order book {}: ignoring duplicate order {}",
                self.symbol,
                order.id()
            );
            return Ok(Trades::new());
        }

        if order.initial_quantity() == 0 {
            return Err(OrderBookError::InvalidQuantity(order.id()));
        }

        if order.time_in_force().is_immediate() && !self.can_match(order.side(), order.price()) {
            debug!(
                "Order book {}: immediate order {} has no counterparty at {}",
                self.symbol,
                order.id(),
                order.price()
            );
            return Ok(Trades::new());
        }

        self.place_order_in_book(order);
        self.match_orders()
    }

    /// Build and submit a limit order
    pub fn add_limit_order(
        &mut self,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        time_in_force: TimeInForce,
    ) -> Result<Trades, OrderBookError> {
        trace!(
            "Adding limit order {} {} {} {} {}",
            id, side, price, quantity, time_in_force
        );
        self.submit(Order::new(id, side, price, quantity, time_in_force))
    }

    /// Cancel a resting order by ID.
    ///
    /// Returns the removed order with whatever quantity was still open.
    /// Fails with [`OrderBookError::OrderNotFound`] if the id is not resting.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<Order, OrderBookError> {
        trace!("Order book {}: Cancelling order {}", self.symbol, order_id);
        let handle = *self
            .order_index
            .get(&order_id)
            .ok_or(OrderBookError::OrderNotFound(order_id))?;
        Ok(self.remove_order(handle))
    }
}
