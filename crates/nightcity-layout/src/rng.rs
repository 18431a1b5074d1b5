//! Seeded random source for placement phases.
//!
//! Each phase builds its own generator from a fixed seed, so a phase always
//! sees the same draw sequence no matter what ran before it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for building placement.
pub const BUILDING_SEED: u64 = 12345;
/// Seed for tree placement.
pub const TREE_SEED: u64 = 54321;

/// A seeded generator that counts how many values it has handed out.
#[derive(Debug, Clone)]
pub struct PlacementRng {
    seed: u64,
    rng: StdRng,
    draws: u64,
}

impl PlacementRng {
    /// Creates a generator positioned at the start of `seed`'s sequence.
    pub fn new(seed: u64) -> Self {
        PlacementRng {
            seed,
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Rewinds to the start of the seed's sequence.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.draws = 0;
    }

    /// Draws uniformly from `[low, high)`. An empty range yields `low`.
    pub fn draw(&mut self, low: i32, high: i32) -> i32 {
        self.draws += 1;
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Values drawn since construction or the last reset.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
