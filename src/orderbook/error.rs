//! Order book error types

use thiserror::Error;

/// Errors that can occur within a single order book.
///
/// All failures are local to the rejected operation; the book's state
/// is unchanged when an error is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum OrderBookError {
    /// Order quantity was zero
    #[error("invalid quantity: order quantity must be positive")]
    InvalidQuantity,

    /// Limit price was zero, negative, or not finite
    #[error("invalid limit price {price}: price must be positive and finite")]
    InvalidPrice {
        /// The price that failed validation
        price: f64,
    },

    /// A string did not name a known side, order kind or status
    #[error("parse error: {message}")]
    Parse {
        /// What failed to parse
        message: String,
    },
}
