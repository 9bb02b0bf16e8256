//! Sample statistics for checking noise distributions.
//!
//! With `n` draws from `N(mu, sigma²)` the sample mean has standard deviation
//! `sigma / sqrt(n)` and the sample variance has variance
//! `2 sigma⁴ / (n - 1)`.  Tests compare against 5 of those deviations.

/// Arithmetic mean.  `NaN` for an empty slice.
pub fn sample_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`).  `NaN` for an empty slice.
pub fn sample_variance(values: &[f64]) -> f64 {
    let mean = sample_mean(values);
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64
}

/// Allowed deviation of the sample mean: `sigmas * stddev / sqrt(n)`.
pub fn mean_tolerance(stddev: f64, n: usize, sigmas: f64) -> f64 {
    sigmas * stddev / (n as f64).sqrt()
}

/// Allowed deviation of the sample variance:
/// `sigmas * sqrt(2 stddev⁴ / (n - 1))`.
pub fn variance_tolerance(stddev: f64, n: usize, sigmas: f64) -> f64 {
    let variance = stddev * stddev;
    sigmas * (2.0 * variance * variance / (n as f64 - 1.0)).sqrt()
}
