//! # Classroom Capacity
//!
//! Capacity-ratio model for a simulated classroom.
//!
//! ## Demand Formula
//!
//! ```text
//! D = (content / time) × (1 / skill) × (1 + 0.025 × (N − 1))
//! ```
//!
//! Where:
//! - content: curriculum content units
//! - time: minutes allotted
//! - skill: teacher effectiveness (0.1-1.0)
//! - N: class size
//!
//! ## Pass/Fail
//!
//! Each student's capacity ratio is `learning_speed / D`; a ratio at or
//! above the passing threshold passes. The empirical fail rate of the drawn
//! class is reported next to the analytic estimate `Φ((threshold × D − μ) / σ)`.
//! The two diverge for small classes; both are kept.

pub mod demand;
pub mod estimator;
pub mod population;
pub mod simulation;
pub mod trend;

use classroom_common::{ParameterSet, SpeedDistribution, PASS_SHARPNESS, TREND_CAPACITY};
use serde::{Deserialize, Serialize};

pub use demand::DemandModel;
pub use estimator::{pass_probability, predicted_fail_rate, standard_normal_cdf};
pub use population::{aggregate_fail_rate, recompute, HistogramBin, Population, StudentResult};
pub use simulation::{RecomputeOutcome, SimulationStatus, SliderUpdate, Simulation};
pub use trend::{TrendSample, TrendTracker};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Trend history length, capped at `TREND_CAPACITY`
    pub trend_capacity: usize,
    /// Logistic pass-probability steepness
    pub pass_sharpness: f64,
    /// Starting parameters (clamped on load)
    pub parameters: ParameterSet,
    /// Learning speed distribution
    pub distribution: SpeedDistribution,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            trend_capacity: TREND_CAPACITY,
            pass_sharpness: PASS_SHARPNESS,
            parameters: ParameterSet::default(),
            distribution: SpeedDistribution::default(),
        }
    }
}
