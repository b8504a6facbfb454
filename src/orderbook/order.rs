//! Order model: sides, time in force, resting orders and modification requests.

use super::error::OrderBookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller-assigned order identity
pub type OrderId = u64;

/// Price in fixed-point ticks
pub type Price = i64;

/// Quantity of a single order or trade
pub type Quantity = u64;

/// Aggregate of many order quantities at a level or across a side
pub type Volume = u128;

/// Side of the book an order rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side
    Buy,
    /// Ask side
    Sell,
}

impl Side {
    /// The side this order would match against
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUY" | "BID" => Ok(Side::Buy),
            "SELL" | "ASK" => Ok(Side::Sell),
            _ => Err(OrderBookError::InvalidInput {
                message: format!("unknown side: {s}"),
            }),
        }
    }
}

/// How long an order may stay in the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Good-till-cancel: rests until filled or cancelled
    Gtc,
    /// Immediate-or-cancel: admitted only when the opposite side offers a match,
    /// any remainder is discarded once matching stops
    Ioc,
}

impl TimeInForce {
    /// Whether the order must not rest after its matching pass
    pub fn is_immediate(&self) -> bool {
        matches!(self, TimeInForce::Ioc)
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GTC" | "GOODTILLCANCEL" => Ok(TimeInForce::Gtc),
            "IOC" | "IMMEDIATEORCANCEL" | "FAK" | "FILLANDKILL" => Ok(TimeInForce::Ioc),
            _ => Err(OrderBookError::InvalidInput {
                message: format!("unknown time in force: {s}"),
            }),
        }
    }
}

/// A limit order.
///
/// Identity, side, price and time in force never change after creation. The
/// remaining quantity only decreases, through [`Order::fill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    side: Side,
    price: Price,
    initial_quantity: Quantity,
    remaining_quantity: Quantity,
    time_in_force: TimeInForce,
}

impl Order {
    /// Create an order with its full quantity still open
    pub fn new(
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            id,
            side,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
            time_in_force,
        }
    }

    /// Create a good-till-cancel order
    pub fn gtc(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self::new(id, side, price, quantity, TimeInForce::Gtc)
    }

    /// Create an immediate-or-cancel order
    pub fn ioc(id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self::new(id, side, price, quantity, TimeInForce::Ioc)
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    pub fn initial_quantity(&self) -> Quantity {
        self.initial_quantity
    }

    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining_quantity
    }

    /// Quantity executed so far
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity - self.remaining_quantity
    }

    /// True once nothing remains open
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Execute `quantity` against this order.
    ///
    /// Fails with [`OrderBookError::InvariantViolation`] if `quantity` exceeds
    /// the remaining quantity; the order is left untouched in that case.
    pub fn fill(&mut self, quantity: Quantity) -> Result<(), OrderBookError> {
        if quantity > self.remaining_quantity {
            return Err(OrderBookError::InvariantViolation {
                order_id: self.id,
                requested: quantity,
                remaining: self.remaining_quantity,
            });
        }
        self.remaining_quantity -= quantity;
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}/{} @ {} {}",
            self.id,
            self.side,
            self.remaining_quantity,
            self.initial_quantity,
            self.price,
            self.time_in_force
        )
    }
}

/// Request to replace a resting order.
///
/// Applied as a cancel of `order_id` followed by the submission of a fresh
/// good-till-cancel order carrying the new side, price and quantity. The
/// replacement joins the back of its price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyOrder {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl ModifyOrder {
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
        }
    }

    /// The order submitted in place of the cancelled one
    pub fn to_order(&self) -> Order {
        Order::gtc(self.order_id, self.side, self.price, self.quantity)
    }
}
