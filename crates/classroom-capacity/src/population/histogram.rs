//! Equal-width capacity ratio histogram for charting

use serde::{Deserialize, Serialize};

use super::results::StudentResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// Lower edge sits below the passing threshold
    pub below_threshold: bool,
}

/// Bin capacity ratios into `bins` equal-width buckets spanning
/// `[min ratio, max ratio]`. The last bin is closed on the right.
///
/// When every ratio is identical the span is widened to ±0.5 around it.
pub fn histogram(results: &[StudentResult], bins: usize, threshold: f64) -> Vec<HistogramBin> {
    if results.is_empty() || bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = results.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.ratio), hi.max(r.ratio))
    });
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| {
            let lower = lo + width * i as f64;
            HistogramBin {
                lower,
                upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
                count: 0,
                below_threshold: lower < threshold,
            }
        })
        .collect();

    for r in results {
        let idx = (((r.ratio - lo) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}
