//! Logistic pass probability

/// Smooth probability of passing for a capacity ratio.
///
/// `1 / (1 + e^(−k · (ratio − threshold)))`; exactly 0.5 at the threshold.
#[inline]
pub fn pass_probability(capacity_ratio: f64, threshold: f64, sharpness: f64) -> f64 {
    1.0 / (1.0 + (-sharpness * (capacity_ratio - threshold)).exp())
}
