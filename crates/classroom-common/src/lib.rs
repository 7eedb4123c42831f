//! # Classroom Common
//!
//! Shared types and errors for the classroom capacity simulation.
//!
//! ## Core Types
//!
//! - [`ParameterSet`]: class size, teacher skill, curriculum content, time allotted,
//!   and passing threshold, each with a documented [`ParameterRange`]
//! - [`Parameter`]: names a single tunable input (what a slider writes)
//! - [`ParameterInput`]: raw, unvalidated values as supplied from outside
//! - [`SpeedDistribution`]: normal distribution of student learning speeds with a floor
//!
//! ## Errors
//!
//! - [`RangeError`]: a value was clamped into range (reported, not fatal)
//! - [`DomainError`]: effective demand would divide by zero
//! - [`DistributionError`]: invalid learning speed distribution

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{DistributionError, DomainError, RangeError, Result, SimulationError};
pub use types::{
    distribution::{SpeedDistribution, DEFAULT_MEAN_SPEED, DEFAULT_MIN_SPEED, DEFAULT_STD_DEV_SPEED},
    parameters::{Parameter, ParameterInput, ParameterRange, ParameterSet},
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of fail-rate samples kept for trend display
pub const TREND_CAPACITY: usize = 50;

/// Number of bins in the capacity ratio histogram
pub const HISTOGRAM_BINS: usize = 8;

/// Steepness of the logistic pass-probability curve
pub const PASS_SHARPNESS: f64 = 5.0;

/// Per-student overhead added to demand for each additional student
pub const CLASS_SIZE_PENALTY_RATE: f64 = 0.025;
