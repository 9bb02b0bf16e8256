//! Scalar noise models for simulated sensors.
//!
//! [`NoiseModel`] is an enum with static dispatch.  The Gaussian variant
//! covers both plain and quantized noise; quantization is a flag inside
//! [`GaussianNoise`] and does not change the reported [`NoiseType`].
//!
//! Every sampling method takes an explicit `&mut R: Rng` parameter so that
//! determinism is guaranteed when the same seed is provided.

use std::fmt;
use std::io;

use rand::Rng;

use crate::config::NoiseConfig;
use crate::custom::CustomNoise;
use crate::error::NoiseError;
use crate::gaussian::GaussianNoise;

// ---------------------------------------------------------------------------
// NoiseType
// ---------------------------------------------------------------------------

/// Externally visible type of a model.  The discriminant is the integer tag
/// used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseType {
    None = 0,
    Custom = 1,
    Gaussian = 2,
}

impl NoiseType {
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

// ---------------------------------------------------------------------------
// NoiseModel
// ---------------------------------------------------------------------------

/// Scalar noise model, owned by exactly one sensor.
///
/// Build it with [`new_noise_model`](crate::factory::new_noise_model), or
/// with [`new`](Self::new) followed by [`load`](Self::load).
#[derive(Clone, Debug)]
pub enum NoiseModel {
    /// Identity transform.
    None,
    /// Additive Gaussian noise with bias, optionally quantized.
    Gaussian(GaussianNoise),
    /// Delegates to a user callback.
    Custom(CustomNoise),
}

impl NoiseModel {
    /// Unloaded model of the given type.  A Gaussian model built this way
    /// does not quantize.
    pub fn new(noise_type: NoiseType) -> Self {
        match noise_type {
            NoiseType::None => Self::None,
            NoiseType::Custom => Self::Custom(CustomNoise::new()),
            NoiseType::Gaussian => Self::gaussian(false),
        }
    }

    /// Unloaded Gaussian model.
    pub fn gaussian(quantized: bool) -> Self {
        Self::Gaussian(GaussianNoise::new(quantized))
    }

    pub fn noise_type(&self) -> NoiseType {
        match self {
            Self::None => NoiseType::None,
            Self::Gaussian(_) => NoiseType::Gaussian,
            Self::Custom(_) => NoiseType::Custom,
        }
    }

    /// Copy the parameters of `config` into the model.
    ///
    /// Only the Gaussian variant has parameters; for the others this is a
    /// no-op.  The config's `type` is not consulted: the model keeps the type
    /// it was built with.
    pub fn load(&mut self, config: &NoiseConfig) {
        if let Self::Gaussian(gaussian) = self {
            gaussian.load(config);
        }
    }

    /// Apply noise to one sample.
    ///
    /// A custom model without a callback returns `value` unchanged.
    pub fn apply<R: Rng + ?Sized>(&mut self, value: f64, dt: f64, rng: &mut R) -> f64 {
        match self {
            Self::None => value,
            Self::Gaussian(gaussian) => gaussian.apply(value, dt, rng),
            Self::Custom(custom) => custom.apply(value, dt),
        }
    }

    /// Like [`apply`](Self::apply), but reports a custom model with no
    /// callback as [`NoiseError::MissingCallback`].
    pub fn try_apply<R: Rng + ?Sized>(
        &mut self,
        value: f64,
        dt: f64,
        rng: &mut R,
    ) -> Result<f64, NoiseError> {
        if let Self::Custom(custom) = self {
            if !custom.has_callback() {
                return Err(NoiseError::MissingCallback);
            }
        }
        Ok(self.apply(value, dt, rng))
    }

    /// Apply noise to every element of `values` in place, in order.
    pub fn apply_slice<R: Rng + ?Sized>(&mut self, values: &mut [f64], dt: f64, rng: &mut R) {
        if matches!(self, Self::None) {
            return;
        }
        for value in values.iter_mut() {
            *value = self.apply(*value, dt, rng);
        }
    }

    /// Attach the callback of a custom model.  Ignored on other types.
    pub fn set_custom_noise_callback<F>(&mut self, callback: F)
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        if let Err(err) = self.try_set_custom_noise_callback(callback) {
            tracing::debug!("ignoring custom noise callback: {err}");
        }
    }

    /// Attach the callback of a custom model, failing with
    /// [`NoiseError::NotCustom`] on other types.
    pub fn try_set_custom_noise_callback<F>(&mut self, callback: F) -> Result<(), NoiseError>
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        match self {
            Self::Custom(custom) => {
                custom.set_callback(callback);
                Ok(())
            }
            other => Err(NoiseError::NotCustom {
                found: other.noise_type(),
            }),
        }
    }

    /// Gaussian state, if this is a Gaussian model.
    pub fn as_gaussian(&self) -> Option<&GaussianNoise> {
        match self {
            Self::Gaussian(gaussian) => Some(gaussian),
            _ => None,
        }
    }

    /// Write the [`Display`](fmt::Display) description to `out`.
    pub fn print<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian(gaussian) => fmt::Display::fmt(gaussian, f),
            other => write!(
                f,
                "Noise with type[{}] does not have an overloaded Print function. \
                 No more information is available.",
                other.noise_type().tag()
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
