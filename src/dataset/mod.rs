//! Dataset management for the coverage-based resampling ensemble.
//!
//! Provides the labeled instance and dataset types plus the per-class
//! partition built once per training run.

pub mod dataset;
pub mod partition;

pub use dataset::{Dataset, Instance};
pub use partition::ClassPartition;
