//! Noise injection for simulated sensors.
//!
//! `sensim-noise` turns ideal sensor measurements into realistically degraded
//! ones.  A sensor holds a [`NoiseConfig`](config::NoiseConfig), asks the
//! [`factory`] for a model once, then calls
//! [`apply`](model::NoiseModel::apply) on every sample.  All sampling takes
//! an explicit RNG parameter for deterministic, reproducible simulations.
//!
//! # Architecture
//!
//! - [`NoiseModel`](model::NoiseModel) is an enum with three variants (None,
//!   Gaussian, Custom).  All dispatch is static via `match`.
//! - [`GaussianNoise`](gaussian::GaussianNoise) carries the bias state and
//!   the quantization flag.
//! - [`CustomNoise`](custom::CustomNoise) forwards to a user callback.
//! - [`VectorNoiseModel`](vector::VectorNoiseModel) wraps scalar models for
//!   multi-axis sensors.
//! - [`presets`] provides descriptors for cameras, lidars, IMUs and encoders.
//!
//! # Quick Start
//!
//! ```
//! use sensim_noise::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let config = NoiseConfig::gaussian(0.0, 0.01).with_bias(0.0, 0.001);
//! let mut noise = new_noise_model(&config, "lidar");
//! let noisy = noise.apply(1.0, 0.01, &mut rng);
//! assert!((noisy - 1.0).abs() < 0.1);
//! ```

pub mod config;
pub mod custom;
pub mod error;
pub mod factory;
pub mod gaussian;
pub mod model;
pub mod presets;
pub mod vector;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{NoiseConfig, NoiseKind};
    pub use crate::error::NoiseError;
    pub use crate::factory::{new_noise_model, new_noise_model_from_descriptor};
    pub use crate::gaussian::GaussianNoise;
    pub use crate::model::{NoiseModel, NoiseType};
    pub use crate::presets;
    pub use crate::vector::{IndependentAxesNoise, VectorNoiseModel};
}
