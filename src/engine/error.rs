//! Engine-level error types

use crate::orderbook::OrderBookError;
use thiserror::Error;

/// Errors surfaced by the [`ExchangeEngine`](crate::ExchangeEngine).
///
/// Every failure is local to the rejected operation; neither the
/// registry nor any book changes state when an error is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The symbol has not been registered
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The symbol is already registered
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),

    /// The registry already holds its configured maximum of symbols
    #[error("symbol registry is full ({capacity} symbols)")]
    RegistryFull {
        /// The configured capacity
        capacity: usize,
    },

    /// The symbol is empty, too long, or not printable ASCII
    #[error("invalid symbol {symbol:?}: must be 1..={max_len} printable ASCII characters")]
    InvalidSymbol {
        /// The rejected symbol
        symbol: String,
        /// The maximum accepted length
        max_len: usize,
    },

    /// The initial reference price was zero, negative, or not finite
    #[error("invalid initial price {price}: must be positive and finite")]
    InvalidInitialPrice {
        /// The rejected price
        price: f64,
    },

    /// A validation failure raised by the symbol's book
    #[error(transparent)]
    Book(#[from] OrderBookError),
}
