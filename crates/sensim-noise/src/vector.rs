//! Multi-dimensional noise for vector-valued sensors.
//!
//! [`VectorNoiseModel`] is a trait for noise over multiple axes.
//! [`IndependentAxesNoise`] is the primary implementation — one
//! [`NoiseModel`] per axis, applied independently
//! (no cross-axis correlation).

use rand::Rng;

use crate::config::NoiseConfig;
use crate::factory::new_noise_model;
use crate::model::NoiseModel;

// ---------------------------------------------------------------------------
// VectorNoiseModel trait
// ---------------------------------------------------------------------------

/// Multi-dimensional noise model.
pub trait VectorNoiseModel: Send + Sync {
    /// Apply noise to a clean vector.  Values past [`dim()`](Self::dim) are
    /// returned unchanged.
    fn apply_vec<R: Rng + ?Sized>(&mut self, values: &[f64], dt: f64, rng: &mut R) -> Vec<f64>;

    /// Number of dimensions (axes).
    fn dim(&self) -> usize;
}

// ---------------------------------------------------------------------------
// IndependentAxesNoise
// ---------------------------------------------------------------------------

/// Independent noise per axis.  Each axis owns its model, so each axis
/// realizes its own bias.
#[derive(Clone, Debug)]
pub struct IndependentAxesNoise {
    models: Vec<NoiseModel>,
}

impl IndependentAxesNoise {
    /// Create from a list of per-axis noise models.
    pub const fn new(models: Vec<NoiseModel>) -> Self {
        Self { models }
    }

    /// Build one model per config through the factory.
    pub fn from_configs(configs: &[NoiseConfig], sensor_kind: &str) -> Self {
        Self {
            models: configs
                .iter()
                .map(|config| new_noise_model(config, sensor_kind))
                .collect(),
        }
    }

    /// Create from a single noise model cloned across `dim` axes.
    ///
    /// Clones are taken as-is: clone an unrealized model if every axis should
    /// draw its own bias.
    pub fn uniform_across(model: NoiseModel, dim: usize) -> Self {
        Self {
            models: vec![model; dim],
        }
    }

    pub fn models(&self) -> &[NoiseModel] {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut [NoiseModel] {
        &mut self.models
    }
}

impl VectorNoiseModel for IndependentAxesNoise {
    fn apply_vec<R: Rng + ?Sized>(&mut self, values: &[f64], dt: f64, rng: &mut R) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .map(|(axis, value)| match self.models.get_mut(axis) {
                Some(model) => model.apply(*value, dt, rng),
                None => *value,
            })
            .collect()
    }

    fn dim(&self) -> usize {
        self.models.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
