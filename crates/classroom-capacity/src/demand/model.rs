//! Effective demand: D = (content / time) × (1 / skill) × penalty(N)

use classroom_common::{DomainError, ParameterSet, CLASS_SIZE_PENALTY_RATE};

pub struct DemandModel;

impl DemandModel {
    /// Class-size penalty: 1 + 0.025 × (n − 1)
    #[inline]
    pub fn class_size_penalty(n: u32) -> f64 {
        1.0 + CLASS_SIZE_PENALTY_RATE * (n as f64 - 1.0)
    }

    /// Curriculum content per minute
    #[inline]
    pub fn base_pace(params: &ParameterSet) -> f64 {
        params.curriculum_content / params.time_allotted
    }

    /// Calculate effective demand on each student.
    ///
    /// Ranges are enforced when parameters are accepted; this only refuses
    /// inputs that would divide by zero or yield a non-positive demand.
    pub fn effective_demand(params: &ParameterSet) -> Result<f64, DomainError> {
        if !(params.teacher_skill > 0.0) {
            return Err(DomainError::NonPositiveTeacherSkill(params.teacher_skill));
        }
        if !(params.time_allotted > 0.0) {
            return Err(DomainError::NonPositiveTimeAllotted(params.time_allotted));
        }

        let teacher_factor = 1.0 / params.teacher_skill;
        let demand = Self::base_pace(params)
            * teacher_factor
            * Self::class_size_penalty(params.class_size);

        if !(demand.is_finite() && demand > 0.0) {
            return Err(DomainError::InvalidDemand(demand));
        }
        Ok(demand)
    }
}
