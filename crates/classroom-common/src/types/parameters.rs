//! ParameterSet - the five tunable inputs of the classroom model
//!
//! Every field has a documented range. Values coming from outside (slider
//! positions, API requests, config files) are clamped into range before the
//! model sees them; out-of-range input is corrected, never rejected.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RangeError;

/// Default number of students
pub const DEFAULT_CLASS_SIZE: u32 = 25;

/// Default teacher effectiveness
pub const DEFAULT_TEACHER_SKILL: f64 = 0.85;

/// Default curriculum content units
pub const DEFAULT_CURRICULUM_CONTENT: f64 = 80.0;

/// Default time allotted in minutes
pub const DEFAULT_TIME_ALLOTTED: f64 = 70.0;

/// Capacity ratio a student needs to pass
pub const DEFAULT_PASSING_THRESHOLD: f64 = 1.0;

/// Class size bounds
pub const CLASS_SIZE_RANGE: ParameterRange = ParameterRange::new(5.0, 40.0);

/// Teacher skill bounds
pub const TEACHER_SKILL_RANGE: ParameterRange = ParameterRange::new(0.1, 1.0);

/// Curriculum content bounds
pub const CURRICULUM_CONTENT_RANGE: ParameterRange = ParameterRange::new(50.0, 200.0);

/// Time allotted bounds (minutes)
pub const TIME_ALLOTTED_RANGE: ParameterRange = ParameterRange::new(30.0, 120.0);

/// The passing threshold is fixed
pub const PASSING_THRESHOLD_RANGE: ParameterRange =
    ParameterRange::new(DEFAULT_PASSING_THRESHOLD, DEFAULT_PASSING_THRESHOLD);

/// Names a single tunable input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    ClassSize,
    TeacherSkill,
    CurriculumContent,
    TimeAllotted,
    PassingThreshold,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::ClassSize,
        Parameter::TeacherSkill,
        Parameter::CurriculumContent,
        Parameter::TimeAllotted,
        Parameter::PassingThreshold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::ClassSize => "class_size",
            Parameter::TeacherSkill => "teacher_skill",
            Parameter::CurriculumContent => "curriculum_content",
            Parameter::TimeAllotted => "time_allotted",
            Parameter::PassingThreshold => "passing_threshold",
        }
    }

    /// Valid range for this parameter
    pub fn range(&self) -> ParameterRange {
        match self {
            Parameter::ClassSize => CLASS_SIZE_RANGE,
            Parameter::TeacherSkill => TEACHER_SKILL_RANGE,
            Parameter::CurriculumContent => CURRICULUM_CONTENT_RANGE,
            Parameter::TimeAllotted => TIME_ALLOTTED_RANGE,
            Parameter::PassingThreshold => PASSING_THRESHOLD_RANGE,
        }
    }

    pub fn default_value(&self) -> f64 {
        ParameterSet::default().get(*self)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp to the nearest bound. NaN is passed through unchanged.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The model's tunable inputs.
///
/// Fields are public so callers can build a set freely; only a set that
/// has been through [`ParameterSet::clamped`] is guaranteed to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Student count, [5, 40]
    pub class_size: u32,
    /// Teacher effectiveness, [0.1, 1.0]
    pub teacher_skill: f64,
    /// Content units, [50, 200]
    pub curriculum_content: f64,
    /// Minutes, [30, 120]
    pub time_allotted: f64,
    /// Fixed at 1.0
    pub passing_threshold: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            class_size: DEFAULT_CLASS_SIZE,
            teacher_skill: DEFAULT_TEACHER_SKILL,
            curriculum_content: DEFAULT_CURRICULUM_CONTENT,
            time_allotted: DEFAULT_TIME_ALLOTTED,
            passing_threshold: DEFAULT_PASSING_THRESHOLD,
        }
    }
}

impl ParameterSet {
    /// Read one parameter as a float
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::ClassSize => self.class_size as f64,
            Parameter::TeacherSkill => self.teacher_skill,
            Parameter::CurriculumContent => self.curriculum_content,
            Parameter::TimeAllotted => self.time_allotted,
            Parameter::PassingThreshold => self.passing_threshold,
        }
    }

    /// Copy of this set with one parameter replaced, unclamped.
    ///
    /// Class size is truncated toward zero; NaN leaves the field unchanged.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        if value.is_nan() {
            return self;
        }
        match parameter {
            Parameter::ClassSize => self.class_size = value.trunc() as u32,
            Parameter::TeacherSkill => self.teacher_skill = value,
            Parameter::CurriculumContent => self.curriculum_content = value,
            Parameter::TimeAllotted => self.time_allotted = value,
            Parameter::PassingThreshold => self.passing_threshold = value,
        }
        self
    }

    /// True when every field lies within its range
    pub fn is_valid(&self) -> bool {
        Parameter::ALL
            .iter()
            .all(|p| p.range().contains(self.get(*p)))
    }

    /// Clamp every field into range.
    ///
    /// Returns the corrected set together with one [`RangeError`] per field
    /// that had to be changed. NaN fields fall back to their default.
    pub fn clamped(&self) -> (ParameterSet, Vec<RangeError>) {
        ParameterInput::from(*self).clamped()
    }
}

/// Parameter values as supplied from outside, before validation.
///
/// Every field is a float so that any number a slider or request carries
/// (negative, fractional, beyond `u32`) reaches [`ParameterInput::clamped`]
/// and is reported as supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterInput {
    pub class_size: f64,
    pub teacher_skill: f64,
    pub curriculum_content: f64,
    pub time_allotted: f64,
    pub passing_threshold: f64,
}

impl Default for ParameterInput {
    fn default() -> Self {
        ParameterSet::default().into()
    }
}

impl From<ParameterSet> for ParameterInput {
    fn from(params: ParameterSet) -> Self {
        Self {
            class_size: params.class_size as f64,
            teacher_skill: params.teacher_skill,
            curriculum_content: params.curriculum_content,
            time_allotted: params.time_allotted,
            passing_threshold: params.passing_threshold,
        }
    }
}

impl ParameterInput {
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::ClassSize => self.class_size,
            Parameter::TeacherSkill => self.teacher_skill,
            Parameter::CurriculumContent => self.curriculum_content,
            Parameter::TimeAllotted => self.time_allotted,
            Parameter::PassingThreshold => self.passing_threshold,
        }
    }

    /// Copy with one raw value replaced
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::ClassSize => self.class_size = value,
            Parameter::TeacherSkill => self.teacher_skill = value,
            Parameter::CurriculumContent => self.curriculum_content = value,
            Parameter::TimeAllotted => self.time_allotted = value,
            Parameter::PassingThreshold => self.passing_threshold = value,
        }
        self
    }

    /// Clamp every field into range.
    ///
    /// Class size is truncated toward zero before clamping; truncation alone
    /// is not reported. NaN falls back to the default. Each [`RangeError`]
    /// carries the value exactly as supplied.
    pub fn clamped(&self) -> (ParameterSet, Vec<RangeError>) {
        let mut out = ParameterSet::default();
        let mut corrections = Vec::new();

        for parameter in Parameter::ALL {
            let range = parameter.range();
            let value = self.get(parameter);
            let sanitized = if value.is_nan() {
                parameter.default_value()
            } else if parameter == Parameter::ClassSize {
                value.trunc()
            } else {
                value
            };
            let clamped = range.clamp(sanitized);

            if value.is_nan() || clamped != sanitized {
                warn!(
                    parameter = %parameter,
                    value,
                    clamped,
                    "Parameter out of range, clamping"
                );
                corrections.push(RangeError {
                    field: parameter,
                    value,
                    min: range.min,
                    max: range.max,
                    clamped,
                });
            }
            out = out.with(parameter, clamped);
        }

        (out, corrections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = ParameterSet::default();
        assert!(params.is_valid());
        assert_eq!(params.class_size, 25);
        assert!((params.teacher_skill - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_lower_bound() {
        let params = ParameterSet {
            teacher_skill: -1.0,
            ..Default::default()
        };
        let (clamped, corrections) = params.clamped();
        assert!((clamped.teacher_skill - 0.1).abs() < f64::EPSILON);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].field, Parameter::TeacherSkill);
        assert!((corrections[0].value + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_upper_bound() {
        let params = ParameterSet {
            class_size: 1000,
            ..Default::default()
        };
        let (clamped, corrections) = params.clamped();
        assert_eq!(clamped.class_size, 40);
        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn test_clamp_in_range_is_noop() {
        let params = ParameterSet::default();
        let (clamped, corrections) = params.clamped();
        assert_eq!(clamped, params);
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_passing_threshold_is_fixed() {
        let params = ParameterSet::default().with(Parameter::PassingThreshold, 0.4);
        let (clamped, _) = params.clamped();
        assert!((clamped.passing_threshold - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_falls_back_to_default() {
        let params = ParameterSet {
            time_allotted: f64::NAN,
            ..Default::default()
        };
        let (clamped, corrections) = params.clamped();
        assert!((clamped.time_allotted - DEFAULT_TIME_ALLOTTED).abs() < f64::EPSILON);
        assert_eq!(corrections.len(), 1);
    }

    #[test]
    fn test_infinity_clamps_to_bound() {
        let params = ParameterSet {
            curriculum_content: f64::INFINITY,
            ..Default::default()
        };
        let (clamped, _) = params.clamped();
        assert!((clamped.curriculum_content - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_truncates_class_size() {
        let params = ParameterSet::default().with(Parameter::ClassSize, 17.9);
        assert_eq!(params.class_size, 17);

        let params = ParameterSet::default().with(Parameter::ClassSize, -3.0);
        assert_eq!(params.class_size, 0);
        assert_eq!(params.clamped().0.class_size, 5);
    }

    #[test]
    fn test_input_reports_raw_class_size() {
        let input = ParameterInput::from(ParameterSet::default()).with(Parameter::ClassSize, -3.0);
        let (clamped, corrections) = input.clamped();
        assert_eq!(clamped.class_size, 5);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].field, Parameter::ClassSize);
        assert!((corrections[0].value + 3.0).abs() < f64::EPSILON);
        assert!((corrections[0].clamped - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_input_truncates_fractional_class_size() {
        let input = ParameterInput {
            class_size: 12.7,
            ..Default::default()
        };
        let (clamped, corrections) = input.clamped();
        assert_eq!(clamped.class_size, 12);
        assert!(corrections.is_empty());
    }

    #[test]
    fn test_input_beyond_u32_clamps_to_upper_bound() {
        let (clamped, corrections) = ParameterInput {
            class_size: 1e10,
            ..Default::default()
        }
        .clamped();
        assert_eq!(clamped.class_size, 40);
        assert!((corrections[0].value - 1e10).abs() < 1.0);
    }

    #[test]
    fn test_input_from_json_any_number() {
        for (json, expected) in [
            (r#"{"class_size": -5}"#, 5),
            (r#"{"class_size": 12.7}"#, 12),
            (r#"{"class_size": 10000000000}"#, 40),
        ] {
            let input: ParameterInput = serde_json::from_str(json).unwrap();
            assert_eq!(input.clamped().0.class_size, expected, "{json}");
        }
    }

    #[test]
    fn test_parameter_serde_names() {
        let json = serde_json::to_string(&Parameter::TeacherSkill).unwrap();
        assert_eq!(json, "\"teacher_skill\"");
        let parsed: Parameter = serde_json::from_str("\"time_allotted\"").unwrap();
        assert_eq!(parsed, Parameter::TimeAllotted);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: ParameterSet = serde_json::from_str(r#"{"class_size": 10}"#).unwrap();
        assert_eq!(params.class_size, 10);
        assert!((params.time_allotted - DEFAULT_TIME_ALLOTTED).abs() < f64::EPSILON);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clamped_is_always_valid(
                class_size in any::<u32>(),
                skill in -10.0f64..10.0,
                content in -500.0f64..500.0,
                time in -500.0f64..500.0,
                threshold in -5.0f64..5.0,
            ) {
                let params = ParameterSet {
                    class_size,
                    teacher_skill: skill,
                    curriculum_content: content,
                    time_allotted: time,
                    passing_threshold: threshold,
                };
                let (clamped, _) = params.clamped();
                prop_assert!(clamped.is_valid());
            }
        }
    }
}
