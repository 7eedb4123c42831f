//! Predicted fail rate: Φ((threshold × D − μ) / σ)
//!
//! A student fails when `speed / D < threshold`, i.e. `speed < threshold × D`.
//! With speeds ~ N(μ, σ²) the expected failing fraction is the normal CDF at
//! that cut-off. The floor applied to drawn speeds is ignored here, which
//! only matters for cut-offs far below the mean.

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Standard normal CDF, Φ(z) = ½ · erfc(−z / √2)
#[inline]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Fraction of a normally distributed class expected to fail
pub fn predicted_fail_rate(demand: f64, mean_speed: f64, std_dev_speed: f64, threshold: f64) -> f64 {
    let z = (threshold * demand - mean_speed) / std_dev_speed;
    standard_normal_cdf(z)
}
