//! Additive Gaussian noise with a per-model bias and optional quantization.
//!
//! Each [`apply`](GaussianNoise::apply) computes
//!
//! ```text
//! out = value + N(mean, stddev²) + bias
//! out = round(out / precision) * precision     (quantized models, precision > 0)
//! ```
//!
//! `bias` is drawn once from `N(bias_mean, bias_stddev²)` on the first call
//! and then held.  When a dynamic bias is configured it additionally follows
//! a first-order Gauss-Markov process driven by the caller's `dt`.

use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::config::NoiseConfig;

/// Draw from `N(mean, stddev²)`.  A zero (or invalid) `stddev` returns
/// `mean` without touching the RNG.
pub(crate) fn draw_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, stddev: f64) -> f64 {
    if stddev > 0.0 {
        let z: f64 = StandardNormal.sample(rng);
        mean + stddev * z
    } else {
        mean
    }
}

/// State of a Gaussian noise source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaussianNoise {
    mean: f64,
    stddev: f64,
    bias_mean: f64,
    bias_stddev: f64,
    precision: f64,
    quantized: bool,
    dynamic_bias_stddev: f64,
    dynamic_bias_correlation_time: f64,
    /// `None` until the first `apply`.
    bias: Option<f64>,
}

impl GaussianNoise {
    /// All-zero model.  `quantized` enables rounding once a positive
    /// precision is loaded.
    pub fn new(quantized: bool) -> Self {
        Self {
            quantized,
            ..Self::default()
        }
    }

    /// Copy the numeric parameters of `config`.
    ///
    /// Invalid spreads are clamped to zero.  A bias realized by an earlier
    /// `apply` is discarded and drawn again from the new parameters on the
    /// next call.
    pub fn load(&mut self, config: &NoiseConfig) {
        let config = config.sanitized();
        if self.bias.is_some() {
            tracing::debug!("reloading gaussian noise, discarding realized bias");
        }
        self.mean = config.mean;
        self.stddev = config.stddev;
        self.bias_mean = config.bias_mean;
        self.bias_stddev = config.bias_stddev;
        self.precision = config.precision;
        self.dynamic_bias_stddev = config.dynamic_bias_stddev;
        self.dynamic_bias_correlation_time = config.dynamic_bias_correlation_time;
        self.bias = None;
    }

    /// Apply noise to one sample.  `dt` is the time since the previous
    /// sample and only drives the dynamic bias.
    pub fn apply<R: Rng + ?Sized>(&mut self, value: f64, dt: f64, rng: &mut R) -> f64 {
        let bias = self.realize_bias(rng);
        let white = draw_normal(rng, self.mean, self.stddev);
        let bias = self.step_dynamic_bias(bias, dt, rng);
        self.bias = Some(bias);

        let out = value + white + bias;
        if self.quantizes() {
            (out / self.precision).round() * self.precision
        } else {
            out
        }
    }

    fn realize_bias<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let (mean, stddev) = (self.bias_mean, self.bias_stddev);
        *self
            .bias
            .get_or_insert_with(|| draw_normal(rng, mean, stddev))
    }

    // Discrete first-order Gauss-Markov step:
    //   phi = exp(-dt/tau),  sigma_d² = sigma² tau/2 (1 - exp(-2 dt/tau))
    fn step_dynamic_bias<R: Rng + ?Sized>(&self, bias: f64, dt: f64, rng: &mut R) -> f64 {
        let sigma = self.dynamic_bias_stddev;
        let tau = self.dynamic_bias_correlation_time;
        if sigma <= 0.0 || tau <= 0.0 || dt.is_nan() || dt <= 0.0 {
            return bias;
        }
        let sigma_d = (-sigma * sigma * tau / 2.0 * (-2.0 * dt / tau).exp_m1()).sqrt();
        let phi = (-dt / tau).exp();
        phi * bias + draw_normal(rng, 0.0, sigma_d)
    }

    fn quantizes(&self) -> bool {
        self.quantized && self.precision > 0.0
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Realized bias, or `None` before the first `apply`.
    pub fn bias(&self) -> Option<f64> {
        self.bias
    }

    pub fn bias_mean(&self) -> f64 {
        self.bias_mean
    }

    pub fn bias_stddev(&self) -> f64 {
        self.bias_stddev
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn is_quantized(&self) -> bool {
        self.quantized
    }

    pub fn dynamic_bias_stddev(&self) -> f64 {
        self.dynamic_bias_stddev
    }

    pub fn dynamic_bias_correlation_time(&self) -> f64 {
        self.dynamic_bias_correlation_time
    }
}

impl fmt::Display for GaussianNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gaussian noise, mean[{}], stdDev[{}], bias[",
            self.mean, self.stddev
        )?;
        match self.bias {
            Some(bias) => write!(f, "{bias}")?,
            None => f.write_str("unset")?,
        }
        write!(
            f,
            "], precision[{}], quantized[{}]",
            self.precision, self.quantized
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
