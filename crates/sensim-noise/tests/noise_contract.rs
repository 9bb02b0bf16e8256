//! Integration test: observable behaviour of factory-built noise models.
//!
//! Checks, with seeded RNGs:
//! 1. Zero-parameter and `none` models leave samples untouched
//! 2. Gaussian output recovers the configured mean and variance (5 sigma)
//! 3. Per-model bias follows its distribution and stays fixed
//! 4. Quantized models snap to the configured precision
//! 5. Custom callbacks and unrecognized types behave as documented

use approx::assert_abs_diff_eq;
use sensim_noise::prelude::*;
use sensim_test_utils::{
    mean_tolerance, sample_mean, sample_variance, seeded_rng, uniform_values, variance_tolerance,
};

const APPLY_COUNT: usize = 100;
const SIGMAS: f64 = 5.0;

fn descriptor(kind: &str, mean: f64, stddev: f64, bias_mean: f64, bias_stddev: f64, precision: f64) -> String {
    format!(
        "type = \"{kind}\"\nmean = {mean:?}\nstddev = {stddev:?}\nbias_mean = {bias_mean:?}\n\
         bias_stddev = {bias_stddev:?}\nprecision = {precision:?}\n"
    )
}

fn assert_no_noise(model: &mut NoiseModel, seed: u64) {
    let mut rng = seeded_rng(seed);
    for x in uniform_values(APPLY_COUNT, -1e6, 1e6, seed) {
        assert_abs_diff_eq!(model.apply(x, 0.0, &mut rng), x, epsilon = 1e-6);
    }
}

fn assert_gaussian_recovery(model: &mut NoiseModel, seed: u64) {
    let mut rng = seeded_rng(seed);
    let x = 42.0;
    let values: Vec<f64> = (0..APPLY_COUNT)
        .map(|_| model.apply(x, 0.0, &mut rng))
        .collect();

    let gaussian = model.as_gaussian().expect("gaussian model");
    let expected_mean = x + gaussian.mean() + gaussian.bias().expect("bias realized");
    let stddev = gaussian.stddev();

    assert_abs_diff_eq!(
        sample_mean(&values),
        expected_mean,
        epsilon = mean_tolerance(stddev, APPLY_COUNT, SIGMAS)
    );
    assert_abs_diff_eq!(
        sample_variance(&values),
        stddev * stddev,
        epsilon = variance_tolerance(stddev, APPLY_COUNT, SIGMAS)
    );
}

fn assert_bias_distribution(kind: &str, bias_stddev: f64) {
    let mut rng = seeded_rng(11);
    let biases: Vec<f64> = (0..APPLY_COUNT)
        .map(|_| {
            let mut model =
                new_noise_model_from_descriptor(&descriptor(kind, 0.0, 0.0, 0.0, bias_stddev, 0.0), "");
            model.apply(0.0, 0.0, &mut rng);
            model.as_gaussian().and_then(GaussianNoise::bias).expect("bias realized")
        })
        .collect();

    assert_abs_diff_eq!(
        sample_mean(&biases),
        0.0,
        epsilon = mean_tolerance(bias_stddev, APPLY_COUNT, SIGMAS)
    );
    assert_abs_diff_eq!(
        sample_variance(&biases),
        bias_stddev * bias_stddev,
        epsilon = variance_tolerance(bias_stddev, APPLY_COUNT, SIGMAS)
    );
}

#[test]
fn descriptor_types() {
    let cases = [
        ("none", NoiseType::None),
        ("gaussian", NoiseType::Gaussian),
        ("gaussian_quantized", NoiseType::Gaussian),
    ];
    for (kind, expected) in cases {
        let model = new_noise_model_from_descriptor(&descriptor(kind, 0.0, 0.0, 0.0, 0.0, 0.0), "");
        assert_eq!(model.noise_type(), expected, "{kind}");
    }
    assert_eq!(
        new_noise_model(&NoiseConfig::default(), "").noise_type(),
        NoiseType::None
    );
}

#[test]
fn apply_none() {
    let mut model = new_noise_model_from_descriptor(&descriptor("none", 0.0, 0.0, 0.0, 0.0, 0.0), "");
    assert_no_noise(&mut model, 1);
}

#[test]
fn apply_gaussian() {
    // Zero means and deviations behave like `none`.
    let mut model =
        new_noise_model_from_descriptor(&descriptor("gaussian", 0.0, 0.0, 0.0, 0.0, 0.0), "");
    assert_no_noise(&mut model, 2);

    // Non-zero mean and deviation, no bias.
    let mut model =
        new_noise_model_from_descriptor(&descriptor("gaussian", 10.0, 5.0, 0.0, 0.0, 0.0), "");
    assert_gaussian_recovery(&mut model, 3);
    assert_abs_diff_eq!(
        model.as_gaussian().and_then(GaussianNoise::bias).unwrap(),
        0.0,
        epsilon = 1e-6
    );

    // Exact bias.
    let mut model =
        new_noise_model_from_descriptor(&descriptor("gaussian", 10.0, 5.0, 100.0, 0.0, 0.0), "");
    assert_gaussian_recovery(&mut model, 4);

    assert_bias_distribution("gaussian", 5.0);
}

#[test]
fn apply_gaussian_quantized() {
    let mut model = new_noise_model_from_descriptor(
        &descriptor("gaussian_quantized", 0.0, 0.0, 0.0, 0.0, 0.0),
        "",
    );
    assert_no_noise(&mut model, 5);

    let mut model = new_noise_model_from_descriptor(
        &descriptor("gaussian_quantized", 10.0, 5.0, 0.0, 0.0, 0.0),
        "",
    );
    assert_gaussian_recovery(&mut model, 6);

    let mut model = new_noise_model_from_descriptor(
        &descriptor("gaussian_quantized", 10.0, 5.0, 100.0, 0.0, 0.0),
        "",
    );
    assert_gaussian_recovery(&mut model, 7);

    assert_bias_distribution("gaussian_quantized", 5.0);
}

#[test]
fn quantized_precision() {
    let mut rng = seeded_rng(8);
    let mut model = new_noise_model_from_descriptor(
        &descriptor("gaussian_quantized", 0.0, 0.0, 0.0, 0.0, 0.3),
        "",
    );
    for x in [0.32, 0.31, 0.30, 0.29, 0.28] {
        assert_abs_diff_eq!(model.apply(x, 0.0, &mut rng), 0.3, epsilon = 1e-6);
    }
    for x in [-12.92, -12.91, -12.90, -12.89, -12.88] {
        assert_abs_diff_eq!(model.apply(x, 0.0, &mut rng), -12.9, epsilon = 1e-6);
    }
}

#[test]
fn bias_is_fixed_per_model() {
    let mut rng = seeded_rng(9);
    let mut model = new_noise_model(&NoiseConfig::gaussian(0.0, 1.0).with_bias(0.0, 5.0), "");
    model.apply(0.0, 0.0, &mut rng);
    let bias = model.as_gaussian().and_then(GaussianNoise::bias);
    assert!(bias.is_some());
    for _ in 0..APPLY_COUNT {
        model.apply(0.0, 0.0, &mut rng);
        assert_eq!(model.as_gaussian().and_then(GaussianNoise::bias), bias);
    }
}

#[test]
fn custom_noise_callback() {
    let mut rng = seeded_rng(10);
    let mut model = NoiseModel::new(NoiseType::Custom);
    assert_eq!(model.noise_type(), NoiseType::Custom);
    model.set_custom_noise_callback(|x, _dt| x * 2.0);
    for i in 0..100 {
        let x = f64::from(i);
        assert_eq!(model.apply(x, 0.0, &mut rng), x * 2.0);
    }
}

#[test]
fn noise_failures() {
    let mut rng = seeded_rng(12);
    let mut custom = NoiseModel::new(NoiseType::Custom);
    assert_eq!(custom.apply(9.0, 0.1, &mut rng), 9.0);

    let mut out = Vec::new();
    custom.print(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Noise with type[1] does not have an overloaded Print function. \
         No more information is available."
    );

    let gaussian = new_noise_model_from_descriptor(
        &descriptor("gaussian", 0.0, 0.0, 0.0, 0.0, 0.0),
        "camera",
    );
    assert_eq!(gaussian.noise_type(), NoiseType::Gaussian);

    let config = NoiseConfig {
        kind: NoiseKind::from_tag(99),
        ..NoiseConfig::default()
    };
    let mut fallback = new_noise_model(&config, "camera");
    assert_eq!(fallback.noise_type(), NoiseType::None);
    assert_no_noise(&mut fallback, 13);
}
