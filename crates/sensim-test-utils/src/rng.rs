//! Deterministic RNG utilities for reproducible tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generate `count` values drawn uniformly from `[low, high)` from a seed.
///
/// Useful for feeding a wide spread of inputs through a noise model.
pub fn uniform_values(count: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = seeded_rng(seed);
    (0..count).map(|_| rng.gen_range(low..high)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
