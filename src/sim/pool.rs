//! A pool of market makers and the thread that drives them.

use crate::engine::ExchangeEngine;
use crate::sim::maker::MarketMaker;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::info;

/// Owns the market makers for an engine and updates them in sequence.
///
/// The pool has no internal concurrency: one driver performs all maker
/// updates, either by calling [`update_all`](Self::update_all) directly
/// or through the thread spawned by [`start`](Self::start). Makers may
/// be added at any time, including after trading has begun.
pub struct MakerPool {
    engine: Arc<ExchangeEngine>,
    makers: Vec<MarketMaker>,
}

impl MakerPool {
    /// Creates an empty pool driving `engine`.
    #[must_use]
    pub fn new(engine: Arc<ExchangeEngine>) -> Self {
        Self {
            engine,
            makers: Vec::new(),
        }
    }

    /// Adds a maker to the pool.
    pub fn add_maker(&mut self, maker: MarketMaker) {
        info!("market maker added for {}", maker.symbol());
        self.makers.push(maker);
    }

    /// Number of makers in the pool
    #[must_use]
    pub fn maker_count(&self) -> usize {
        self.makers.len()
    }

    /// The engine this pool quotes into
    #[must_use]
    pub fn engine(&self) -> &Arc<ExchangeEngine> {
        &self.engine
    }

    /// Runs one update cycle on every maker, in insertion order.
    pub fn update_all(&mut self) {
        for maker in &mut self.makers {
            maker.update(&self.engine);
        }
    }

    /// Consumes the pool and spawns the driver thread, which runs
    /// [`update_all`](Self::update_all) every `interval` until the
    /// returned handle is stopped.
    pub fn start(self, interval: Duration) -> MakerPoolHandle {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let mut pool = self;

        let handle = thread::spawn(move || {
            info!("market maker driver started ({} makers)", pool.maker_count());

            while flag.load(Ordering::Relaxed) {
                pool.update_all();
                thread::sleep(interval);
            }

            info!("market maker driver stopped");
            pool
        });

        MakerPoolHandle { running, handle }
    }
}

/// Handle to a running maker driver thread.
pub struct MakerPoolHandle {
    running: Arc<AtomicBool>,
    handle: JoinHandle<MakerPool>,
}

impl MakerPoolHandle {
    /// Signals the driver to stop, joins it, and returns the pool so it
    /// can be restarted or inspected.
    pub fn stop(self) -> MakerPool {
        self.running.store(false, Ordering::Relaxed);
        match self.handle.join() {
            Ok(pool) => pool,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
