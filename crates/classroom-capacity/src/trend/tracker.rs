//! Bounded fail-rate history
//!
//! FIFO ring buffer: once full, each new sample evicts the oldest.

use std::collections::VecDeque;

use classroom_common::TREND_CAPACITY;
use serde::{Deserialize, Serialize};

/// One recompute's aggregate figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSample {
    /// Fraction failing, [0, 1]
    pub fail_rate: f64,
    pub mean_ratio: Option<f64>,
    pub demand: Option<f64>,
}

impl TrendSample {
    pub fn from_rate(fail_rate: f64) -> Self {
        Self {
            fail_rate,
            mean_ratio: None,
            demand: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrendTracker {
    capacity: usize,
    history: VecDeque<TrendSample>,
}

impl Default for TrendTracker {
    fn default() -> Self {
        Self::new(TREND_CAPACITY)
    }
}

impl TrendTracker {
    /// Create a tracker holding at most `capacity` samples, kept within
    /// `1..=TREND_CAPACITY`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, TREND_CAPACITY);
        Self {
            capacity,
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a fail rate
    pub fn record(&mut self, rate: f64) {
        self.record_sample(TrendSample::from_rate(rate));
    }

    /// Append a full sample, evicting the oldest when full
    pub fn record_sample(&mut self, sample: TrendSample) {
        if self.history.len() >= self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(sample);
    }

    /// Fail rates in recording order
    pub fn snapshot(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.fail_rate).collect()
    }

    /// Full samples in recording order
    pub fn samples(&self) -> impl Iterator<Item = &TrendSample> + '_ {
        self.history.iter()
    }

    pub fn latest(&self) -> Option<&TrendSample> {
        self.history.back()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
