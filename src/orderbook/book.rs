//! Core OrderBook implementation: one symbol's bids, asks and trade state.

use crate::orderbook::error::OrderBookError;
use crate::orderbook::level::PriceLevel;
use crate::orderbook::order::{Order, OrderId, OrderKind, OrderStatus, Side};
use crate::orderbook::snapshot::{DepthLevel, DepthSnapshot, TopOfBook};
use crate::orderbook::trade::SubmitResult;
use crate::utils::current_time_micros;
use ordered_float::OrderedFloat;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Map key for price levels.
///
/// Prices flow through the API as `f64` and levels are located by exact
/// bit equality, so the key wraps the unmodified double rather than a
/// rounded tick count.
pub(super) type PriceKey = OrderedFloat<f64>;

/// A limit order book for a single symbol.
///
/// Both sides are ordered maps from price to [`PriceLevel`]; the best
/// bid is the highest bid key and the best ask the lowest ask key.
/// Orders at one price match in FIFO arrival order. A secondary
/// `OrderId -> (side, price)` index makes cancellation O(1) in the
/// number of levels.
///
/// All public operations acquire the book's single exclusive lock for
/// their duration, so every call observes (and produces) a coherent
/// state, and mutations on one book are totally ordered.
///
/// # Examples
///
/// ```
/// use matchbook_rs::{OrderBook, OrderKind, Side};
///
/// let book = OrderBook::new("AAPL");
/// book.submit(Side::Sell, OrderKind::Limit, 100.0, 50).unwrap();
/// let result = book.submit(Side::Buy, OrderKind::Limit, 100.0, 50).unwrap();
///
/// // one fill, reported once per side
/// assert_eq!(result.reports.len(), 2);
/// assert_eq!(book.last_trade_price(), 100.0);
/// ```
pub struct OrderBook {
    /// The symbol this book trades
    symbol: String,
    /// All mutable state, behind the book's exclusive lock
    inner: Mutex<BookCore>,
}

/// The lock-protected interior of an [`OrderBook`].
pub(super) struct BookCore {
    /// Bid levels; the best bid is the last (greatest) key
    pub(super) bids: BTreeMap<PriceKey, PriceLevel>,
    /// Ask levels; the best ask is the first (least) key
    pub(super) asks: BTreeMap<PriceKey, PriceLevel>,
    /// Location index for O(1) cancellation of resting orders
    pub(super) order_locations: HashMap<OrderId, (Side, PriceKey)>,
    /// Next order id to assign; ids are strictly increasing per book
    pub(super) next_order_id: u64,
    /// Cached best bid, kept equal to the greatest bid key
    pub(super) best_bid: Option<f64>,
    /// Cached best ask, kept equal to the least ask key
    pub(super) best_ask: Option<f64>,
    /// Price of the most recent fill; seeded with the symbol's initial
    /// price at registration
    pub(super) last_trade_price: f64,
    /// Quantity of the most recent fill
    pub(super) last_trade_qty: u64,
}

impl BookCore {
    fn new(initial_last_price: f64) -> Self {
        Self {
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_locations: HashMap::new(),
            next_order_id: 1,
            best_bid: None,
            best_ask: None,
            last_trade_price: initial_last_price,
            last_trade_qty: 0,
        }
    }

    fn allocate_order_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next_order_id);
        self.next_order_id += 1;
        id
    }

    /// Recomputes the cached best price on `side` from the map extreme.
    pub(super) fn refresh_best(&mut self, side: Side) {
        match side {
            Side::Buy => {
                self.best_bid = self.bids.keys().next_back().map(|key| key.into_inner());
            }
            Side::Sell => {
                self.best_ask = self.asks.keys().next().map(|key| key.into_inner());
            }
        }
    }

    /// Links an order with unfilled remainder into its side of the book.
    fn rest_order(&mut self, order: Order) {
        let side = order.side;
        let key = OrderedFloat(order.price);

        self.order_locations.insert(order.id, (side, key));
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        levels
            .entry(key)
            .or_insert_with(|| PriceLevel::new(order.price))
            .push_back(order);
        self.refresh_best(side);
    }

    /// Unlinks a resting order, dropping its level if it empties.
    /// Returns false when no live order with that id exists.
    fn remove_order(&mut self, order_id: OrderId) -> bool {
        let Some((side, key)) = self.order_locations.remove(&order_id) else {
            return false;
        };

        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let Some(level) = levels.get_mut(&key) else {
            return false;
        };
        level.remove(order_id);
        if level.is_empty() {
            levels.remove(&key);
        }
        self.refresh_best(side);
        true
    }
}

impl OrderBook {
    /// Creates an empty order book for `symbol`.
    pub fn new(symbol: &str) -> Self {
        Self::with_initial_price(symbol, 0.0)
    }

    /// Creates an empty order book whose `last_trade_price` is seeded
    /// with `initial_last_price`, so mid-price queries have a reference
    /// before the first fill.
    pub fn with_initial_price(symbol: &str, initial_last_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            inner: Mutex::new(BookCore::new(initial_last_price)),
        }
    }

    /// The symbol this book trades
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Submits an order: assigns the next id, crosses it against the
    /// opposite side, and rests any unfilled limit remainder.
    ///
    /// Market orders walk as many levels as needed; whatever cannot be
    /// filled is cancelled and never rests. Limit orders stop at their
    /// limit price and rest the remainder at it.
    ///
    /// # Errors
    /// [`OrderBookError::InvalidQuantity`] when `quantity` is zero, and
    /// [`OrderBookError::InvalidPrice`] when a limit price is not
    /// positive and finite. Rejected submissions leave the book
    /// unchanged and consume no order id.
    pub fn submit(
        &self,
        side: Side,
        kind: OrderKind,
        price: f64,
        quantity: u64,
    ) -> Result<SubmitResult, OrderBookError> {
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity);
        }
        if kind == OrderKind::Limit && (!price.is_finite() || price <= 0.0) {
            return Err(OrderBookError::InvalidPrice { price });
        }

        let mut core = self.inner.lock();
        let mut order = Order::new(core.allocate_order_id(), side, kind, price, quantity);
        let order_id = order.id;
        trace!(
            "{}: submit order {} {} {} {} x {}",
            self.symbol, order_id, side, kind, price, quantity
        );

        let reports = core.execute(&mut order);
        let filled_quantity = order.filled_quantity;

        let status = if order.remaining() == 0 {
            order.status
        } else {
            match kind {
                OrderKind::Limit => {
                    let status = order.status;
                    core.rest_order(order);
                    status
                }
                // a market order never rests; the remainder is abandoned
                OrderKind::Market => OrderStatus::Cancelled,
            }
        };

        Ok(SubmitResult {
            order_id,
            status,
            filled_quantity,
            reports,
        })
    }

    /// Cancels a resting order by id.
    ///
    /// Returns true when a live order was removed; false when no order
    /// with that id rests in this book (a logical no-op, not an error).
    pub fn cancel(&self, order_id: OrderId) -> bool {
        let cancelled = self.inner.lock().remove_order(order_id);
        if cancelled {
            trace!("{}: cancelled order {}", self.symbol, order_id);
        }
        cancelled
    }

    /// Best (highest) bid price, if any bids rest
    pub fn best_bid(&self) -> Option<f64> {
        self.inner.lock().best_bid
    }

    /// Best (lowest) ask price, if any asks rest
    pub fn best_ask(&self) -> Option<f64> {
        self.inner.lock().best_ask
    }

    /// Midpoint of the best bid and ask.
    ///
    /// Falls back to the present side when only one side has orders,
    /// and to `last_trade_price` when the book is empty.
    pub fn mid_price(&self) -> f64 {
        let core = self.inner.lock();
        match (core.best_bid, core.best_ask) {
            (Some(bid), Some(ask)) => (bid + ask) / 2.0,
            (Some(bid), None) => bid,
            (None, Some(ask)) => ask,
            (None, None) => core.last_trade_price,
        }
    }

    /// Best ask minus best bid, or `0.0` unless both sides are present
    pub fn spread(&self) -> f64 {
        let core = self.inner.lock();
        match (core.best_bid, core.best_ask) {
            (Some(bid), Some(ask)) => ask - bid,
            _ => 0.0,
        }
    }

    /// Price of the most recent fill (the registered initial price
    /// before any trade)
    pub fn last_trade_price(&self) -> f64 {
        self.inner.lock().last_trade_price
    }

    /// Quantity of the most recent fill, `0` before any trade
    pub fn last_trade_qty(&self) -> u64 {
        self.inner.lock().last_trade_qty
    }

    /// Number of orders currently resting in this book
    pub fn order_count(&self) -> usize {
        self.inner.lock().order_locations.len()
    }

    /// Copies of the orders queued at `price` on `side`, FIFO order.
    /// Empty when no level exists at that exact price.
    pub fn orders_at(&self, side: Side, price: f64) -> Vec<Order> {
        let core = self.inner.lock();
        let levels = match side {
            Side::Buy => &core.bids,
            Side::Sell => &core.asks,
        };
        levels
            .get(&OrderedFloat(price))
            .map(|level| level.orders().cloned().collect())
            .unwrap_or_default()
    }

    /// Ordered copy of the top `max_levels` levels of `side`, best
    /// price first.
    pub fn depth(&self, side: Side, max_levels: usize) -> Vec<DepthLevel> {
        let core = self.inner.lock();
        let iter: Box<dyn Iterator<Item = &PriceLevel>> = match side {
            Side::Buy => Box::new(core.bids.values().rev()),
            Side::Sell => Box::new(core.asks.values()),
        };
        iter.take(max_levels)
            .map(|level| DepthLevel {
                price: level.price(),
                quantity: level.total_quantity(),
                orders: level.order_count(),
            })
            .collect()
    }

    /// Timestamped [`DepthSnapshot`] of one side
    pub fn depth_snapshot(&self, side: Side, max_levels: usize) -> DepthSnapshot {
        DepthSnapshot {
            symbol: self.symbol.clone(),
            side,
            levels: self.depth(side, max_levels),
            timestamp: current_time_micros(),
        }
    }

    /// Coherent top-of-book market data record
    pub fn top_of_book(&self) -> TopOfBook {
        let core = self.inner.lock();
        TopOfBook {
            symbol: self.symbol.clone(),
            bid: core.best_bid.unwrap_or(0.0),
            ask: core.best_ask.unwrap_or(0.0),
            last: core.last_trade_price,
            last_size: core.last_trade_qty,
            timestamp: current_time_micros(),
        }
    }
}
