//! Student population
//!
//! Learning speeds are drawn once per generation and kept until the class
//! size changes or the population is explicitly reset. Capacity ratios and
//! pass/fail labels are derived from them on every recompute.

pub mod generator;
pub mod histogram;
pub mod results;

pub use self::generator::Population;
pub use self::histogram::{histogram, HistogramBin};
pub use self::results::{aggregate_fail_rate, mean_ratio, passing_count, recompute, StudentResult};
