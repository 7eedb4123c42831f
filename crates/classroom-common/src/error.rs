//! Error types for the classroom simulation
//!
//! Provides a unified error type and the model's domain-specific variants

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::parameters::Parameter;

/// Result type alias using SimulationError
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Unified error type for simulation operations
#[derive(Debug, Error)]
pub enum SimulationError {
    // Parameter range errors (normally absorbed by clamping)
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    // Demand computation errors
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    // Learning speed distribution errors
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A supplied parameter fell outside its documented bound.
///
/// The acceptance policy is clamp-and-continue, so this is reported
/// alongside the corrected value rather than returned as a failure.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{field} = {value} outside [{min}, {max}], clamped to {clamped}")]
pub struct RangeError {
    pub field: Parameter,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub clamped: f64,
}

/// Effective demand would divide by zero
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("teacher skill must be positive, got {0}")]
    NonPositiveTeacherSkill(f64),

    #[error("time allotted must be positive, got {0}")]
    NonPositiveTimeAllotted(f64),

    #[error("effective demand is not a positive finite number: {0}")]
    InvalidDemand(f64),
}

/// Learning speed distribution rejected at construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("mean must be finite, got {0}")]
    InvalidMean(f64),

    #[error("standard deviation must be positive and finite, got {0}")]
    InvalidStdDev(f64),

    #[error("minimum speed must be positive and finite, got {0}")]
    InvalidMinSpeed(f64),
}
