//! Core data types for the classroom simulation

pub mod distribution;
pub mod parameters;
