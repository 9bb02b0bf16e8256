//! Noise descriptors.
//!
//! A [`NoiseConfig`] is the plain-data recipe a sensor hands to the
//! [`factory`](crate::factory).  It is usually deserialized from a TOML
//! table:
//!
//! ```toml
//! type = "gaussian_quantized"
//! mean = 0.0
//! stddev = 0.01
//! bias_mean = 0.1
//! bias_stddev = 0.001
//! precision = 0.005
//! ```
//!
//! Every key is optional.  Missing numbers default to `0.0`, a missing
//! `type` means `"none"`, and unknown keys are ignored.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::NoiseError;

// ---------------------------------------------------------------------------
// NoiseKind
// ---------------------------------------------------------------------------

/// The `type` tag of a descriptor.
///
/// Parsing never fails: a tag that is not one of the known names is kept as
/// [`Unrecognized`](Self::Unrecognized) so that the factory can degrade it
/// to the identity model and report what it saw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NoiseKind {
    #[default]
    None,
    Gaussian,
    GaussianQuantized,
    Custom,
    Unrecognized(String),
}

impl NoiseKind {
    /// Map an integer tag (`0 = none, 1 = custom, 2 = gaussian,
    /// 3 = gaussian_quantized`) to a kind.  Out-of-range tags are kept as
    /// [`Unrecognized`](Self::Unrecognized).
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            0 => Self::None,
            1 => Self::Custom,
            2 => Self::Gaussian,
            3 => Self::GaussianQuantized,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Descriptor spelling of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Gaussian => "gaussian",
            Self::GaussianQuantized => "gaussian_quantized",
            Self::Custom => "custom",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for NoiseKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Self::None,
            "gaussian" => Self::Gaussian,
            "gaussian_quantized" => Self::GaussianQuantized,
            "custom" => Self::Custom,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<&str> for NoiseKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<NoiseKind> for String {
    fn from(kind: NoiseKind) -> Self {
        match kind {
            NoiseKind::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NoiseConfig
// ---------------------------------------------------------------------------

/// Noise recipe for one sensor noise source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    #[serde(rename = "type")]
    pub kind: NoiseKind,

    /// Mean of the per-sample Gaussian perturbation.
    pub mean: f64,

    /// Standard deviation of the per-sample Gaussian perturbation.
    pub stddev: f64,

    /// Mean of the constant bias realized once per model.
    pub bias_mean: f64,

    /// Standard deviation of the constant bias.
    pub bias_stddev: f64,

    /// Quantization step.  `0` disables quantization.
    pub precision: f64,

    /// Standard deviation of the slowly varying bias.  `0` keeps the bias
    /// constant.
    pub dynamic_bias_stddev: f64,

    /// Correlation time in seconds of the slowly varying bias.
    pub dynamic_bias_correlation_time: f64,
}

impl NoiseConfig {
    /// Descriptor that leaves samples untouched.
    pub fn none() -> Self {
        Self::default()
    }

    /// Additive Gaussian noise `N(mean, stddev²)`.
    pub fn gaussian(mean: f64, stddev: f64) -> Self {
        Self {
            kind: NoiseKind::Gaussian,
            mean,
            stddev,
            ..Self::default()
        }
    }

    /// Additive Gaussian noise followed by rounding to multiples of
    /// `precision`.
    pub fn gaussian_quantized(mean: f64, stddev: f64, precision: f64) -> Self {
        Self {
            kind: NoiseKind::GaussianQuantized,
            mean,
            stddev,
            precision,
            ..Self::default()
        }
    }

    /// Descriptor for a model driven by a user callback.
    pub fn custom() -> Self {
        Self {
            kind: NoiseKind::Custom,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_bias(mut self, bias_mean: f64, bias_stddev: f64) -> Self {
        self.bias_mean = bias_mean;
        self.bias_stddev = bias_stddev;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_dynamic_bias(mut self, stddev: f64, correlation_time: f64) -> Self {
        self.dynamic_bias_stddev = stddev;
        self.dynamic_bias_correlation_time = correlation_time;
        self
    }

    /// Parse a descriptor from a TOML table.
    pub fn from_toml_str(content: &str) -> Result<Self, NoiseError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a descriptor from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NoiseError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that every spread/step parameter is finite and non-negative.
    ///
    /// Means are not range-checked.
    pub fn validate(&self) -> Result<(), NoiseError> {
        for (field, value) in self.non_negative_fields() {
            if !is_valid_spread(value) {
                return Err(NoiseError::InvalidParameter { field, value });
            }
        }
        Ok(())
    }

    /// Copy of this config with every invalid spread/step parameter clamped
    /// to `0.0`.  Each clamp is logged as a warning.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        for (field, value) in out.non_negative_fields_mut() {
            if !is_valid_spread(*value) {
                warn!(field, value = *value, "noise parameter must be finite and >= 0, clamping to 0");
                *value = 0.0;
            }
        }
        out
    }

    fn non_negative_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("stddev", self.stddev),
            ("bias_stddev", self.bias_stddev),
            ("precision", self.precision),
            ("dynamic_bias_stddev", self.dynamic_bias_stddev),
            (
                "dynamic_bias_correlation_time",
                self.dynamic_bias_correlation_time,
            ),
        ]
    }

    fn non_negative_fields_mut(&mut self) -> [(&'static str, &mut f64); 5] {
        [
            ("stddev", &mut self.stddev),
            ("bias_stddev", &mut self.bias_stddev),
            ("precision", &mut self.precision),
            ("dynamic_bias_stddev", &mut self.dynamic_bias_stddev),
            (
                "dynamic_bias_correlation_time",
                &mut self.dynamic_bias_correlation_time,
            ),
        ]
    }
}

fn is_valid_spread(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
