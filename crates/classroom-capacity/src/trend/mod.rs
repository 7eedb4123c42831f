//! Fail-rate trend module
pub mod tracker;

pub use self::tracker::{TrendSample, TrendTracker};
