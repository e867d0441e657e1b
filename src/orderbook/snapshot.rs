//! Read-only snapshots of book state for market data distribution.

use crate::orderbook::order::Side;
use serde::{Deserialize, Serialize};

/// Aggregate view of one price level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel {
    /// Level price
    pub price: f64,
    /// Sum of unfilled remainders resting at this price
    pub quantity: u64,
    /// Number of orders queued at this price
    pub orders: usize,
}

/// Ordered copy of the top levels of one side of a book, best price
/// first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthSnapshot {
    /// The book's symbol
    pub symbol: String,
    /// Which side was snapshotted
    pub side: Side,
    /// Levels in best-first order
    pub levels: Vec<DepthLevel>,
    /// Snapshot time, microseconds since the Unix epoch
    pub timestamp: u64,
}

impl DepthSnapshot {
    /// Serializes this snapshot as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Top-of-book market data record for one symbol.
///
/// This is the record a periodic market-data broadcaster serializes per
/// symbol. Absent sides are reported as `0.0`, matching the wire
/// convention of downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopOfBook {
    /// The book's symbol
    pub symbol: String,
    /// Best bid price, `0.0` when the bid side is empty
    pub bid: f64,
    /// Best ask price, `0.0` when the ask side is empty
    pub ask: f64,
    /// Last trade price, or the registered initial price before any trade
    pub last: f64,
    /// Last trade quantity, `0` before any trade
    pub last_size: u64,
    /// Snapshot time, microseconds since the Unix epoch
    pub timestamp: u64,
}

impl TopOfBook {
    /// Serializes this record as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
