//! Effective demand module
pub mod model;

pub use self::model::DemandModel;
