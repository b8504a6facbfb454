use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::ModifyOrder;
use super::trade::Trades;
use tracing::trace;

impl OrderBook {
    /// Replace a resting order.
    ///
    /// Cancels `modify.order_id` and submits a fresh good-till-cancel order
    /// with the requested side, price and quantity. The replacement loses its
    /// time priority. Fails before touching the book with
    /// [`OrderBookError::OrderNotFound`] if the id is not resting, or with
    /// [`OrderBookError::InvalidQuantity`] if the new quantity is zero.
    pub fn modify(&mut self, modify: ModifyOrder) -> Result<Trades, OrderBookError> {
        trace!("Order book {}: Modifying order {:?}", self.symbol, modify);
        if !self.contains_order(modify.order_id) {
            return Err(OrderBookError::OrderNotFound(modify.order_id));
        }
        if modify.quantity == 0 {
            return Err(OrderBookError::InvalidQuantity(modify.order_id));
        }
        self.cancel(modify.order_id)?;
        self.submit(modify.to_order())
    }
}
