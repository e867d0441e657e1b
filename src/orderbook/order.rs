//! Order model: sides, order kinds, statuses and the order record itself.

use crate::orderbook::error::OrderBookError;
use crate::utils::current_time_micros;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The side of an order or quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Returns the opposite side
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Returns true for the buy side
    #[must_use]
    pub fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
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
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(OrderBookError::Parse {
                message: format!("invalid side: {s}"),
            }),
        }
    }
}

/// How an order interacts with the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderKind {
    /// Executes immediately against resting liquidity; never rests.
    Market,
    /// Executes up to its limit price; the unfilled remainder rests.
    Limit,
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Market => write!(f, "MARKET"),
            OrderKind::Limit => write!(f, "LIMIT"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MARKET" => Ok(OrderKind::Market),
            "LIMIT" => Ok(OrderKind::Limit),
            _ => Err(OrderBookError::Parse {
                message: format!("invalid order kind: {s}"),
            }),
        }
    }
}

/// Represents the current status of an order in the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order is resting in the book with no fills
    New,

    /// Order has been partially filled
    PartiallyFilled,

    /// Order has been completely filled
    Filled,

    /// Order has been cancelled, either by the owner or because a market
    /// order ran out of opposing liquidity
    Cancelled,
}

impl OrderStatus {
    /// Returns true if an order with this status is still live in the book
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::New | Self::PartiallyFilled)
    }

    /// Returns true if the order has been terminated (filled or cancelled)
    #[must_use]
    pub fn is_terminated(self) -> bool {
        matches!(self, Self::Filled | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => write!(f, "NEW"),
            OrderStatus::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            OrderStatus::Filled => write!(f, "FILLED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(OrderStatus::New),
            "PARTIALLY_FILLED" => Ok(OrderStatus::PartiallyFilled),
            "FILLED" => Ok(OrderStatus::Filled),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            _ => Err(OrderBookError::Parse {
                message: format!("invalid order status: {s}"),
            }),
        }
    }
}

/// Identifier of an order within one book.
///
/// Ids are assigned by the book at submission, are unique per book and
/// strictly increasing in submission order. They are the stable handle
/// used for cancellation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wraps a raw id value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single order.
///
/// Limit orders are owned by the price level they rest on; market orders
/// never rest and live only for the duration of the submitting call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier within the book
    pub id: OrderId,
    /// Buy or sell
    pub side: Side,
    /// Market or limit
    pub kind: OrderKind,
    /// Limit price; meaningful only when `kind` is [`OrderKind::Limit`]
    pub price: f64,
    /// Original quantity
    pub quantity: u64,
    /// Quantity filled so far, `0..=quantity`
    pub filled_quantity: u64,
    /// Current status
    pub status: OrderStatus,
    /// Creation time, microseconds since the Unix epoch
    pub timestamp: u64,
}

impl Order {
    pub(crate) fn new(id: OrderId, side: Side, kind: OrderKind, price: f64, quantity: u64) -> Self {
        Self {
            id,
            side,
            kind,
            price,
            quantity,
            filled_quantity: 0,
            status: OrderStatus::New,
            timestamp: current_time_micros(),
        }
    }

    /// Unfilled remainder of this order
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.quantity - self.filled_quantity
    }

    /// Applies a fill of `quantity` units and returns the resulting status.
    ///
    /// The caller guarantees `quantity <= self.remaining()`.
    pub(crate) fn fill(&mut self, quantity: u64) -> OrderStatus {
        debug_assert!(quantity <= self.remaining());
        self.filled_quantity += quantity;
        self.status = if self.filled_quantity == self.quantity {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        };
        self.status
    }
}
