//! Geometric Brownian Motion price model.

use crate::sim::rng::Lcg32;

/// Prices never fall below this floor, keeping the model strictly
/// positive.
pub const MIN_PRICE: f64 = 0.01;

/// A discretized Geometric Brownian Motion price process.
///
/// Each step applies the log-Euler update
/// `S(t+dt) = S(t) * exp((mu - sigma^2 / 2) * dt + sigma * sqrt(dt) * Z)`
/// with `Z ~ N(0, 1)` drawn from the model's own [`Lcg32`]. Drift and
/// volatility are annualized; `dt` is the fraction of a year covered by
/// one step.
#[derive(Debug, Clone)]
pub struct GbmModel {
    initial_price: f64,
    drift: f64,
    volatility: f64,
    dt: f64,
    current_price: f64,
    rng: Lcg32,
}

impl GbmModel {
    /// Creates a model starting at `initial_price` with its own
    /// generator seeded by `seed`.
    #[must_use]
    pub fn new(initial_price: f64, drift: f64, volatility: f64, dt: f64, seed: u32) -> Self {
        Self {
            initial_price,
            drift,
            volatility,
            dt,
            current_price: initial_price,
            rng: Lcg32::new(seed),
        }
    }

    /// The price the model started from
    #[must_use]
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    /// The most recently generated price
    #[must_use]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Advances the process one step and returns the new price,
    /// floored at [`MIN_PRICE`].
    pub fn next_price(&mut self) -> f64 {
        let z = self.rng.normal();
        let drift_term = (self.drift - 0.5 * self.volatility * self.volatility) * self.dt;
        let diffusion_term = self.volatility * self.dt.sqrt() * z;

        self.current_price = (self.current_price * (drift_term + diffusion_term).exp())
            .max(MIN_PRICE);
        self.current_price
    }

    /// Restores the current price to the initial price. The generator
    /// state is untouched, so the next path continues the random
    /// sequence.
    pub fn reset(&mut self) {
        self.current_price = self.initial_price;
    }
}
