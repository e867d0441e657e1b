//! Synthetic liquidity: seedable randomness, the GBM fair-price model,
//! and the market-maker pool that quotes it into the engine.

mod gbm;
mod maker;
mod pool;
mod rng;

pub use gbm::{GbmModel, MIN_PRICE};
pub use maker::{MakerConfig, MarketMaker, UPDATE_TIME_STEP};
pub use pool::{MakerPool, MakerPoolHandle};
pub use rng::Lcg32;
