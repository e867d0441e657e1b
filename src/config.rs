//! Simulation configuration: the symbol table, maker parameters and
//! driver cadence, loadable from TOML.

use crate::sim::MakerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`SimulationConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One tradeable symbol and its initial reference price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// Symbol name, at most 15 printable ASCII characters
    pub symbol: String,
    /// Initial reference price, seeds the book's last-trade price and
    /// the maker's fair-price model
    pub initial_price: f64,
}

impl SymbolConfig {
    /// Convenience constructor
    #[must_use]
    pub fn new(symbol: &str, initial_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            initial_price,
        }
    }
}

/// Full configuration of an engine-plus-makers simulation.
///
/// `Default` gives a ready-to-run market: five large-cap symbols, a
/// 100 ms maker cadence, and the default [`MakerConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Symbols to register, in order
    pub symbols: Vec<SymbolConfig>,
    /// Quoting parameters shared by all makers
    pub maker: MakerConfig,
    /// Milliseconds between maker update cycles
    pub update_interval_ms: u64,
    /// Master seed from which each maker's generator seed is derived
    pub master_seed: u32,
    /// Maximum number of symbols the engine registry accepts
    pub max_symbols: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            symbols: vec![
                SymbolConfig::new("AAPL", 150.0),
                SymbolConfig::new("MSFT", 380.0),
                SymbolConfig::new("GOOGL", 140.0),
                SymbolConfig::new("AMZN", 180.0),
                SymbolConfig::new("TSLA", 250.0),
            ],
            maker: MakerConfig::default(),
            update_interval_ms: 100,
            master_seed: 42,
            max_symbols: 16,
        }
    }
}

impl SimulationConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&raw)?)
    }

    /// Deterministic per-maker seed for the maker at `index`, derived
    /// from the master seed with a golden-ratio stride so neighboring
    /// makers do not share low-bit structure.
    #[must_use]
    pub fn maker_seed(&self, index: usize) -> u32 {
        self.master_seed
            .wrapping_add((index as u32).wrapping_mul(0x9E37_79B9))
    }
}
