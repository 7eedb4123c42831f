//! Analytic estimates that do not depend on a drawn population
//!
//! - [`normal`]: predicted fail rate through the standard-normal CDF
//! - [`logistic`]: smooth per-student pass probability

pub mod logistic;
pub mod normal;

pub use self::logistic::pass_probability;
pub use self::normal::{predicted_fail_rate, standard_normal_cdf};
