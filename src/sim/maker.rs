//! A synthetic market maker quoting a multi-level ladder around a
//! modeled fair price.

use crate::engine::ExchangeEngine;
use crate::orderbook::{OrderId, OrderKind, Side};
use crate::sim::gbm::GbmModel;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Model time covered by one maker update, in years: 100 ms of a
/// 252-day, 6.5-hour trading year.
pub const UPDATE_TIME_STEP: f64 = 0.1 / (252.0 * 6.5 * 3600.0);

/// Quoting parameters for one market maker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MakerConfig {
    /// Annualized drift of the fair-price process
    pub drift: f64,
    /// Annualized volatility of the fair-price process
    pub volatility: f64,
    /// Full quoted spread between the innermost bid and ask, in basis
    /// points of the fair price
    pub spread_bps: f64,
    /// Quantity quoted at every ladder level
    pub order_size: u64,
    /// Number of ladder levels quoted per side
    pub num_levels: usize,
    /// Distance between consecutive ladder levels, in basis points of
    /// the fair price
    pub level_spacing_bps: f64,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            drift: 0.05,
            volatility: 0.20,
            spread_bps: 20.0,
            order_size: 100,
            num_levels: 5,
            level_spacing_bps: 5.0,
        }
    }
}

/// A market maker for one symbol.
///
/// Each update advances the maker's own GBM model to a new fair price,
/// cancels the ladder it quoted last cycle, and posts a fresh ladder of
/// `num_levels` bids below and asks above the fair price. The order ids
/// returned on submission are recorded per ladder slot so the next
/// cycle can cancel exactly the orders that are still resting.
#[derive(Debug)]
pub struct MarketMaker {
    symbol: String,
    model: GbmModel,
    spread_bps: f64,
    order_size: u64,
    num_levels: usize,
    level_spacing_bps: f64,
    bid_orders: Vec<Option<OrderId>>,
    ask_orders: Vec<Option<OrderId>>,
}

impl MarketMaker {
    /// Creates a maker for `symbol`, with a fair-price model starting
    /// at `initial_price` and a private generator seeded by `seed`.
    #[must_use]
    pub fn new(symbol: &str, initial_price: f64, config: &MakerConfig, seed: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            model: GbmModel::new(
                initial_price,
                config.drift,
                config.volatility,
                UPDATE_TIME_STEP,
                seed,
            ),
            spread_bps: config.spread_bps,
            order_size: config.order_size,
            num_levels: config.num_levels,
            level_spacing_bps: config.level_spacing_bps,
            bid_orders: vec![None; config.num_levels],
            ask_orders: vec![None; config.num_levels],
        }
    }

    /// The symbol this maker quotes
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The maker's current modeled fair price
    pub fn fair_price(&self) -> f64 {
        self.model.current_price()
    }

    /// Number of ladder slots currently holding a resting order id
    pub fn resting_order_count(&self) -> usize {
        self.bid_orders
            .iter()
            .chain(self.ask_orders.iter())
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Cancels every recorded ladder order and clears the slots.
    ///
    /// Slots whose orders already traded out are skipped; ids that were
    /// filled between cycles cancel as no-ops.
    pub fn cancel_all(&mut self, engine: &ExchangeEngine) {
        for slot in self.bid_orders.iter_mut().chain(self.ask_orders.iter_mut()) {
            if let Some(order_id) = slot.take() {
                let _ = engine.cancel(&self.symbol, order_id);
            }
        }
    }

    /// Runs one quote cycle: advance the fair price, cancel the old
    /// ladder, post the new one.
    pub fn update(&mut self, engine: &ExchangeEngine) {
        let fair_price = self.model.next_price();

        self.cancel_all(engine);

        let half_spread = fair_price * self.spread_bps / 20_000.0;
        let level_spacing = fair_price * self.level_spacing_bps / 10_000.0;

        for i in 0..self.num_levels {
            let offset = i as f64 * level_spacing;

            let bid_price = fair_price - half_spread - offset;
            self.bid_orders[i] = self.place(engine, Side::Buy, bid_price);

            let ask_price = fair_price + half_spread + offset;
            self.ask_orders[i] = self.place(engine, Side::Sell, ask_price);
        }

        trace!(
            "{}: requoted {} levels around fair price {:.4}",
            self.symbol, self.num_levels, fair_price
        );
    }

    /// Submits one ladder order, returning its id when it rests.
    ///
    /// Orders that fill completely on entry (or are rejected, e.g. a
    /// deep ladder level pushed below zero) leave the slot empty.
    fn place(&self, engine: &ExchangeEngine, side: Side, price: f64) -> Option<OrderId> {
        match engine.submit(&self.symbol, side, OrderKind::Limit, price, self.order_size) {
            Ok(result) if result.is_resting() => Some(result.order_id),
            Ok(_) => None,
            Err(err) => {
                trace!("{}: ladder order rejected: {}", self.symbol, err);
                None
            }
        }
    }
}
