//! Construction of noise models from descriptors.
//!
//! The factory never fails.  Anything it cannot make sense of degrades to
//! [`NoiseModel::None`] with a warning, so a sensor always ends up with a
//! usable model.

use tracing::warn;

use crate::config::{NoiseConfig, NoiseKind};
use crate::model::{NoiseModel, NoiseType};

/// Build and load the model described by `config`.
///
/// `sensor_kind` (e.g. `"camera"`) only appears in diagnostics and may be
/// empty.
pub fn new_noise_model(config: &NoiseConfig, sensor_kind: &str) -> NoiseModel {
    let mut model = match &config.kind {
        NoiseKind::None => NoiseModel::None,
        NoiseKind::Gaussian => NoiseModel::gaussian(false),
        NoiseKind::GaussianQuantized => NoiseModel::gaussian(true),
        NoiseKind::Custom => NoiseModel::new(NoiseType::Custom),
        NoiseKind::Unrecognized(raw) => {
            if sensor_kind.is_empty() {
                warn!(noise_type = %raw, "unrecognized noise type, using no noise");
            } else {
                warn!(
                    sensor = sensor_kind,
                    noise_type = %raw,
                    "unrecognized noise type for sensor, using no noise"
                );
            }
            NoiseModel::None
        }
    };
    model.load(config);
    model
}

/// Parse a TOML descriptor and build its model.
///
/// A descriptor that fails to parse yields [`NoiseModel::None`].
pub fn new_noise_model_from_descriptor(descriptor: &str, sensor_kind: &str) -> NoiseModel {
    match NoiseConfig::from_toml_str(descriptor) {
        Ok(config) => new_noise_model(&config, sensor_kind),
        Err(err) => {
            warn!(sensor = sensor_kind, "invalid noise descriptor, using no noise: {err}");
            NoiseModel::None
        }
    }
}
