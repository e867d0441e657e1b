//! # Multi-Symbol Matching Engine with Synthetic Liquidity
//!
//! A limit order book matching engine for a fixed set of symbols, with an
//! attached population of market makers that keep every book liquid. The
//! crate targets exchange simulators and trading-system testbeds: client
//! order flow and synthetic liquidity enter through the same `submit`
//! path, cross against resting orders under price-time priority, and
//! come back as execution reports ready to serialize onto a feed.
//!
//! ## Architecture
//!
//! Three layers, leaves first:
//!
//! - **Order book** ([`OrderBook`]): per symbol, two ordered price maps
//!   (bids and asks) of FIFO [`PriceLevel`]s, cached best prices, last
//!   trade state, and an id index for O(1) cancellation. Every public
//!   operation runs under the book's single exclusive lock, so each call
//!   observes a coherent book and mutations are totally ordered per
//!   symbol.
//! - **Engine** ([`ExchangeEngine`]): a bounded registry of books with
//!   the unified submit/cancel path, per-symbol market data queries
//!   ([`TopOfBook`], depth snapshots), and an optional listener that
//!   observes every [`ExecutionReport`].
//! - **Simulation** ([`MarketMaker`], [`MakerPool`]): one maker per
//!   symbol, each owning a seeded [`GbmModel`] fair-price process.
//!   On every cycle a maker cancels its previous quote ladder and posts
//!   a fresh multi-level ladder around the new fair price; a single
//!   driver thread runs all makers at a configured cadence.
//!
//! Matching follows the standard exchange rules: fills execute at the
//! resting order's price, better prices match first, and ties at one
//! price go to the earlier arrival. Market orders walk as many levels
//! as needed and whatever cannot be filled is cancelled, never rested.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{ExchangeEngine, OrderKind, OrderStatus, Side};
//!
//! let engine = ExchangeEngine::new();
//! engine.add_symbol("AAPL", 150.0).unwrap();
//!
//! // resting liquidity
//! engine.submit("AAPL", Side::Sell, OrderKind::Limit, 150.10, 100).unwrap();
//!
//! // an aggressive buy crosses it
//! let result = engine
//!     .submit("AAPL", Side::Buy, OrderKind::Limit, 150.10, 40)
//!     .unwrap();
//! assert_eq!(result.status, OrderStatus::Filled);
//! assert_eq!(result.reports.len(), 2);
//! assert_eq!(result.reports[0].price, 150.10);
//!
//! let top = engine.top_of_book("AAPL").unwrap();
//! assert_eq!(top.last, 150.10);
//! assert_eq!(top.ask, 150.10); // 60 still resting
//! ```
//!
//! ## Determinism
//!
//! Each maker owns its own [`Lcg32`] generator, seeded at construction
//! from a master seed, so a simulation run is reproducible regardless of
//! which thread drives the makers. Two engines configured identically
//! and driven identically produce identical books.
//!
//! ## Concurrency
//!
//! The engine is built for parallel callers: any number of threads may
//! submit, cancel and query concurrently. Lock ordering is flat. The
//! registry lock is only held briefly during registration and lookup,
//! and book locks are never nested, so deadlock is structurally
//! impossible. No I/O happens under a lock; listener callbacks fire
//! after the book lock is released.

pub mod config;
pub mod engine;
pub mod orderbook;
pub mod sim;

pub mod prelude;
mod utils;

pub use config::{ConfigError, SimulationConfig, SymbolConfig};
pub use engine::{DEFAULT_SYMBOL_CAPACITY, EngineError, ExchangeEngine, MAX_SYMBOL_LEN};
pub use orderbook::{
    DepthLevel, DepthSnapshot, ExecutionListener, ExecutionReport, Order, OrderBook,
    OrderBookError, OrderId, OrderKind, OrderStatus, PriceLevel, Side, SubmitResult, TopOfBook,
};
pub use sim::{GbmModel, Lcg32, MakerConfig, MakerPool, MakerPoolHandle, MarketMaker};
pub use utils::{current_time_micros, setup_logger};
