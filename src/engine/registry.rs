//! The exchange engine: a bounded registry of per-symbol books with a
//! unified submit/cancel path.

use crate::engine::error::EngineError;
use crate::orderbook::{
    DepthLevel, ExecutionListener, OrderBook, OrderId, OrderKind, Side, SubmitResult, TopOfBook,
};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, trace};

/// Default maximum number of symbols an engine accepts.
pub const DEFAULT_SYMBOL_CAPACITY: usize = 16;

/// Maximum symbol length in characters.
pub const MAX_SYMBOL_LEN: usize = 15;

/// A multi-symbol matching engine.
///
/// Holds one [`OrderBook`] per registered symbol. Client flow and
/// synthetic liquidity both enter through [`submit`](Self::submit);
/// the engine resolves the symbol's book and performs the operation
/// under that book's exclusive lock.
///
/// The registry itself is protected by its own lock, taken briefly for
/// registration and lookup. Book locks are never nested, so operations
/// on distinct symbols proceed independently.
///
/// # Examples
///
/// ```
/// use matchbook_rs::{ExchangeEngine, OrderKind, Side};
///
/// let engine = ExchangeEngine::new();
/// engine.add_symbol("AAPL", 150.0).unwrap();
///
/// engine.submit("AAPL", Side::Sell, OrderKind::Limit, 100.0, 100).unwrap();
/// let result = engine.submit("AAPL", Side::Buy, OrderKind::Limit, 100.0, 100).unwrap();
/// assert_eq!(result.reports.len(), 2);
/// ```
pub struct ExchangeEngine {
    /// Registered books; linear lookup by symbol
    books: RwLock<Vec<Arc<OrderBook>>>,
    /// Maximum number of registered symbols
    capacity: usize,
    /// Invoked per execution report after the book lock is released
    execution_listener: Option<ExecutionListener>,
}

impl ExchangeEngine {
    /// Creates an engine with the default symbol capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SYMBOL_CAPACITY)
    }

    /// Creates an engine accepting at most `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            books: RwLock::new(Vec::with_capacity(capacity)),
            capacity,
            execution_listener: None,
        }
    }

    /// Creates an engine with an execution listener that observes every
    /// report produced by [`submit`](Self::submit).
    pub fn with_execution_listener(listener: ExecutionListener) -> Self {
        let mut engine = Self::new();
        engine.execution_listener = Some(listener);
        engine
    }

    /// Sets or replaces the execution listener.
    pub fn set_execution_listener(&mut self, listener: ExecutionListener) {
        self.execution_listener = Some(listener);
    }

    /// Registers a new symbol and creates its book, seeding the book's
    /// last-trade price with `initial_price`.
    ///
    /// # Errors
    /// Rejects malformed symbols, non-positive or non-finite prices,
    /// duplicates, and registration beyond the configured capacity.
    pub fn add_symbol(&self, symbol: &str, initial_price: f64) -> Result<(), EngineError> {
        if symbol.is_empty()
            || symbol.len() > MAX_SYMBOL_LEN
            || !symbol.chars().all(|c| c.is_ascii_graphic())
        {
            return Err(EngineError::InvalidSymbol {
                symbol: symbol.to_string(),
                max_len: MAX_SYMBOL_LEN,
            });
        }
        if !initial_price.is_finite() || initial_price <= 0.0 {
            return Err(EngineError::InvalidInitialPrice {
                price: initial_price,
            });
        }

        let mut books = self.books.write();
        if books.iter().any(|book| book.symbol() == symbol) {
            return Err(EngineError::DuplicateSymbol(symbol.to_string()));
        }
        if books.len() >= self.capacity {
            return Err(EngineError::RegistryFull {
                capacity: self.capacity,
            });
        }

        books.push(Arc::new(OrderBook::with_initial_price(
            symbol,
            initial_price,
        )));
        info!("registered symbol {} at {}", symbol, initial_price);
        Ok(())
    }

    /// The book for `symbol`, if registered.
    pub fn get_book(&self, symbol: &str) -> Option<Arc<OrderBook>> {
        self.books
            .read()
            .iter()
            .find(|book| book.symbol() == symbol)
            .cloned()
    }

    /// Position of `symbol` in registration order, if registered.
    pub fn symbol_index(&self, symbol: &str) -> Option<usize> {
        self.books
            .read()
            .iter()
            .position(|book| book.symbol() == symbol)
    }

    /// True when `symbol` is registered.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbol_index(symbol).is_some()
    }

    /// All registered symbols, in registration order.
    pub fn symbols(&self) -> Vec<String> {
        self.books
            .read()
            .iter()
            .map(|book| book.symbol().to_string())
            .collect()
    }

    /// Number of registered symbols.
    pub fn symbol_count(&self) -> usize {
        self.books.read().len()
    }

    fn resolve(&self, symbol: &str) -> Result<Arc<OrderBook>, EngineError> {
        self.get_book(symbol)
            .ok_or_else(|| EngineError::UnknownSymbol(symbol.to_string()))
    }

    /// Submits an order for `symbol` and returns the submission outcome
    /// with its execution reports.
    ///
    /// The execution listener, when set, observes each report after the
    /// book lock has been released.
    ///
    /// # Errors
    /// [`EngineError::UnknownSymbol`] for unregistered symbols, and the
    /// book's validation errors for bad quantities or prices.
    pub fn submit(
        &self,
        symbol: &str,
        side: Side,
        kind: OrderKind,
        price: f64,
        quantity: u64,
    ) -> Result<SubmitResult, EngineError> {
        let book = self.resolve(symbol)?;
        let result = book.submit(side, kind, price, quantity)?;

        if let Some(listener) = &self.execution_listener {
            for report in &result.reports {
                listener(report);
            }
        }
        Ok(result)
    }

    /// Cancels a resting order on `symbol`'s book.
    ///
    /// Returns `Ok(false)` when no live order has that id (a logical
    /// no-op, not an error).
    ///
    /// # Errors
    /// [`EngineError::UnknownSymbol`] for unregistered symbols.
    pub fn cancel(&self, symbol: &str, order_id: OrderId) -> Result<bool, EngineError> {
        let book = self.resolve(symbol)?;
        let cancelled = book.cancel(order_id);
        trace!("{}: cancel {} -> {}", symbol, order_id, cancelled);
        Ok(cancelled)
    }

    /// Best bid on `symbol`, `None` when the bid side is empty.
    pub fn best_bid(&self, symbol: &str) -> Result<Option<f64>, EngineError> {
        Ok(self.resolve(symbol)?.best_bid())
    }

    /// Best ask on `symbol`, `None` when the ask side is empty.
    pub fn best_ask(&self, symbol: &str) -> Result<Option<f64>, EngineError> {
        Ok(self.resolve(symbol)?.best_ask())
    }

    /// Mid price on `symbol` (see [`OrderBook::mid_price`]).
    pub fn mid_price(&self, symbol: &str) -> Result<f64, EngineError> {
        Ok(self.resolve(symbol)?.mid_price())
    }

    /// Spread on `symbol`, `0.0` unless both sides are present.
    pub fn spread(&self, symbol: &str) -> Result<f64, EngineError> {
        Ok(self.resolve(symbol)?.spread())
    }

    /// Last trade price and quantity on `symbol`.
    pub fn last_trade(&self, symbol: &str) -> Result<(f64, u64), EngineError> {
        let book = self.resolve(symbol)?;
        Ok((book.last_trade_price(), book.last_trade_qty()))
    }

    /// Ordered top `max_levels` of one side of `symbol`'s book.
    pub fn depth(
        &self,
        symbol: &str,
        side: Side,
        max_levels: usize,
    ) -> Result<Vec<DepthLevel>, EngineError> {
        Ok(self.resolve(symbol)?.depth(side, max_levels))
    }

    /// Top-of-book market data record for `symbol`.
    pub fn top_of_book(&self, symbol: &str) -> Result<TopOfBook, EngineError> {
        Ok(self.resolve(symbol)?.top_of_book())
    }
}

impl Default for ExchangeEngine {
    fn default() -> Self {
        Self::new()
    }
}
