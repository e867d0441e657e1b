//! Prelude module that re-exports commonly used types and traits.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use matchbook_rs::prelude::*;
//! ```

// Core order book types
pub use crate::orderbook::{Order, OrderBook, OrderBookError, OrderId, OrderKind, OrderStatus, Side};

// Engine types
pub use crate::engine::{EngineError, ExchangeEngine};

// Execution and market data records
pub use crate::orderbook::{
    DepthLevel, DepthSnapshot, ExecutionListener, ExecutionReport, SubmitResult, TopOfBook,
};

// Simulation types
pub use crate::sim::{GbmModel, Lcg32, MakerConfig, MakerPool, MakerPoolHandle, MarketMaker};

// Configuration
pub use crate::config::{SimulationConfig, SymbolConfig};

// Utility functions
pub use crate::utils::{current_time_micros, setup_logger};
