//! Multi-symbol matching engine: the symbol registry and the unified
//! submit/cancel path shared by client flow and synthetic liquidity.

mod error;
mod registry;

pub use error::EngineError;
pub use registry::{DEFAULT_SYMBOL_CAPACITY, ExchangeEngine, MAX_SYMBOL_LEN};
