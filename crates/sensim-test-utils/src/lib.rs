//! Shared test fixtures and utilities for sensim crates.
//!
//! Provides deterministic RNG setup and the sample statistics used to check
//! noise distributions.

pub mod rng;
pub mod stats;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use rng::{seeded_rng, uniform_values};
pub use stats::{mean_tolerance, sample_mean, sample_variance, variance_tolerance};
