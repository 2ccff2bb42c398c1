//! Configuration management for the coverage-based resampling ensemble.

pub mod core;
pub mod validation;

pub use self::core::{TrainingConfig, TrainingConfigBuilder};
