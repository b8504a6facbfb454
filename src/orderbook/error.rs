//! Order book error types

use super::order::{OrderId, Quantity};
use std::fmt;

/// Errors that can occur within the OrderBook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// Order not resting in the book
    OrderNotFound(OrderId),

    /// Order submitted with nothing to trade
    InvalidQuantity(OrderId),

    /// A fill larger than the order's remaining quantity.
    /// Only a defect in the matching loop can produce this.
    InvariantViolation {
        /// Order the fill was applied to
        order_id: OrderId,
        /// Quantity the fill asked for
        requested: Quantity,
        /// Quantity the order still had open
        remaining: Quantity,
    },

    /// Unrecognised textual value for a model type
    InvalidInput {
        /// Description of the error
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::InvalidQuantity(id) => {
                write!(f, "Invalid quantity: order {} has zero quantity", id)
            }
            OrderBookError::InvariantViolation {
                order_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Invariant violation: order {} fill of {} exceeds remaining {}",
                    order_id, requested, remaining
                )
            }
            OrderBookError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
