//! Per-student capacity ratios and aggregate pass/fail figures

use serde::{Deserialize, Serialize};

use crate::estimator::pass_probability;

/// One student's outcome for the current parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentResult {
    /// learning speed / effective demand
    pub ratio: f64,
    /// ratio >= passing threshold
    pub passed: bool,
    /// Logistic pass probability for the same ratio
    pub pass_probability: f64,
}

/// Capacity ratio and pass/fail label for each speed.
///
/// Pure; `demand` must be positive (guaranteed by the demand model).
pub fn recompute(speeds: &[f64], demand: f64, threshold: f64, sharpness: f64) -> Vec<StudentResult> {
    speeds
        .iter()
        .map(|&speed| {
            let ratio = speed / demand;
            StudentResult {
                ratio,
                passed: ratio >= threshold,
                pass_probability: pass_probability(ratio, threshold, sharpness),
            }
        })
        .collect()
}

/// Fraction of students who failed; 0.0 for an empty class
pub fn aggregate_fail_rate(results: &[StudentResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let failed = results.iter().filter(|r| !r.passed).count();
    failed as f64 / results.len() as f64
}

/// Mean capacity ratio; 0.0 for an empty class
pub fn mean_ratio(results: &[StudentResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results.iter().map(|r| r.ratio).sum::<f64>() / results.len() as f64
}

pub fn passing_count(results: &[StudentResult]) -> usize {
    results.iter().filter(|r| r.passed).count()
}
