//! Execution reports produced by the matching engine.

use crate::orderbook::order::{OrderId, OrderStatus};
use crate::utils::current_time_micros;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// One side of one fill.
///
/// Every fill produces exactly two reports sharing a `trade_id`: one for
/// the aggressor and one for the resting order it traded against. The
/// price is always the resting order's price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Identifier of the fill, shared by both sibling reports
    pub trade_id: Uuid,
    /// The order this report describes
    pub order_id: OrderId,
    /// The order on the other side of the fill
    pub counterparty_id: OrderId,
    /// Trade price
    pub price: f64,
    /// Trade quantity
    pub quantity: u64,
    /// Status of `order_id` after this fill
    pub status: OrderStatus,
    /// Report creation time, microseconds since the Unix epoch.
    ///
    /// Sampled independently per report; the two siblings of one fill
    /// may differ by a few microseconds.
    pub timestamp: u64,
}

impl ExecutionReport {
    pub(crate) fn new(
        trade_id: Uuid,
        order_id: OrderId,
        counterparty_id: OrderId,
        price: f64,
        quantity: u64,
        status: OrderStatus,
    ) -> Self {
        Self {
            trade_id,
            order_id,
            counterparty_id,
            price,
            quantity,
            status,
            timestamp: current_time_micros(),
        }
    }

    /// Serializes this report as a single JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Result of submitting one order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitResult {
    /// Identifier assigned to the submitted order; the handle used to
    /// cancel it while it rests
    pub order_id: OrderId,
    /// Final status of the submitted order when the call returned
    pub status: OrderStatus,
    /// Total quantity filled on entry
    pub filled_quantity: u64,
    /// Fills in execution order, two reports per fill
    pub reports: Vec<ExecutionReport>,
}

impl SubmitResult {
    /// True when the order is resting in the book and can be cancelled
    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.status.is_active()
    }
}

/// Callback invoked by the engine for every execution report, after the
/// book lock has been released.
pub type ExecutionListener = Arc<dyn Fn(&ExecutionReport) + Send + Sync>;
