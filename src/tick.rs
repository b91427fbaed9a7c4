//! Adaptive tick delay policy.
//!
//! The delay before the next automatic advance is
//! `floor(uniform(0,1) * 1000 / body_length)` milliseconds, so the game
//! speeds up as the snake grows. The host arms exactly one delay at a
//! time: an accepted key press advances synchronously and resets the
//! outstanding delay instead of stacking a second chain, and nothing is
//! re-armed once the game is over.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct TickScheduler {
    rng: StdRng,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic scheduler for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Delay before the next automatic advance, in `[0, 1000/body_len)`
    /// milliseconds.
    pub fn next_delay(&mut self, body_len: usize) -> Duration {
        debug_assert!(body_len >= 1);
        let ms = (self.rng.gen::<f64>() * 1000.0 / body_len as f64) as u64;
        Duration::from_millis(ms)
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
