//! Ready-made noise descriptors for common simulated sensors.
//!
//! Values follow the defaults commonly used in robot description files.
//! Build models from them with
//! [`new_noise_model`](crate::factory::new_noise_model).

use crate::config::NoiseConfig;
use crate::vector::IndependentAxesNoise;

// ---------------------------------------------------------------------------
// Imaging presets
// ---------------------------------------------------------------------------

/// Per-pixel intensity noise for an RGB camera, in normalized `[0, 1]`
/// units.
pub fn camera_intensity() -> NoiseConfig {
    NoiseConfig::gaussian(0.0, 0.007)
}

/// Depth image noise, in meters.
pub fn depth_camera() -> NoiseConfig {
    NoiseConfig::gaussian(0.0, 0.005)
}

/// Lidar range noise, in meters.
pub fn lidar_range() -> NoiseConfig {
    NoiseConfig::gaussian(0.0, 0.01)
}

// ---------------------------------------------------------------------------
// IMU presets
// ---------------------------------------------------------------------------

/// Gyroscope noise for one axis, in rad/s, with a small turn-on bias.
pub fn gyroscope() -> NoiseConfig {
    NoiseConfig::gaussian(0.0, 2e-4).with_bias(7.5e-6, 8e-7)
}

/// Accelerometer noise for one axis, in m/s², with a turn-on bias.
pub fn accelerometer() -> NoiseConfig {
    NoiseConfig::gaussian(0.0, 1.7e-2).with_bias(0.1, 0.001)
}

/// 3-axis gyroscope, each axis with its own bias.
pub fn gyroscope_3axis() -> IndependentAxesNoise {
    IndependentAxesNoise::from_configs(&[gyroscope(), gyroscope(), gyroscope()], "imu")
}

/// 3-axis accelerometer, each axis with its own bias.
pub fn accelerometer_3axis() -> IndependentAxesNoise {
    IndependentAxesNoise::from_configs(
        &[accelerometer(), accelerometer(), accelerometer()],
        "imu",
    )
}

// ---------------------------------------------------------------------------
// Encoder presets
// ---------------------------------------------------------------------------

/// Joint encoder: 1 mrad Gaussian noise quantized to the encoder
/// `resolution` (radians per tick).
pub fn encoder_position(resolution: f64) -> NoiseConfig {
    NoiseConfig::gaussian_quantized(0.0, 0.001, resolution)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
