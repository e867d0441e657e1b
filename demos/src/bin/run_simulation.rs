// demos/src/bin/run_simulation.rs
//
// Runs the full simulated market: an engine with the default symbol
// table, one market maker per symbol driven at the configured cadence,
// and a periodic top-of-book snapshot printed as JSON lines (the shape
// a market-data broadcaster would put on the wire).
//
// Pass a TOML config path to override the defaults:
//   cargo run --bin run_simulation -- my_market.toml

use matchbook_rs::{
    ExchangeEngine, MakerPool, MarketMaker, SimulationConfig, setup_logger,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const SNAPSHOT_ROUNDS: usize = 20;

fn main() {
    setup_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("could not load {path}: {err}; using defaults");
                SimulationConfig::default()
            }
        },
        None => SimulationConfig::default(),
    };

    let engine = Arc::new(ExchangeEngine::with_capacity(config.max_symbols));
    let mut pool = MakerPool::new(Arc::clone(&engine));

    for (index, entry) in config.symbols.iter().enumerate() {
        engine
            .add_symbol(&entry.symbol, entry.initial_price)
            .expect("symbol table from config");
        pool.add_maker(MarketMaker::new(
            &entry.symbol,
            entry.initial_price,
            &config.maker,
            config.maker_seed(index),
        ));
    }

    info!(
        "starting simulation: {} symbols, {} ms cadence",
        engine.symbol_count(),
        config.update_interval_ms
    );
    let interval = Duration::from_millis(config.update_interval_ms);
    let handle = pool.start(interval);

    // snapshot loop: one market-data line per symbol per round
    for _ in 0..SNAPSHOT_ROUNDS {
        std::thread::sleep(interval);
        for symbol in engine.symbols() {
            let top = engine.top_of_book(&symbol).expect("registered symbol");
            match top.to_json() {
                Ok(line) => println!("{line}"),
                Err(err) => warn!("{symbol}: snapshot serialization failed: {err}"),
            }
        }
    }

    handle.stop();
    info!("simulation finished");
}
