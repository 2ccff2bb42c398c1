//! Eager validation of training configuration parameters.
//!
//! All checks run before any partitioning, sampling, or training work, so
//! a rejected configuration never leaves partial state behind.

use crate::config::core::TrainingConfig;
use crate::core::error::{CoverageEnsembleError, Result};

/// Validate a training configuration.
///
/// The coverage range is checked only when the coverage branch is active;
/// a fixed-round configuration may carry an out-of-range coverage value it
/// never reads.
pub fn validate(config: &TrainingConfig) -> Result<()> {
    if !config.use_fixed_round_count {
        validate_coverage_percent(config.coverage_percent)?;
    }

    if config.fixed_round_count < 1 {
        return Err(CoverageEnsembleError::config(format!(
            "fixed_round_count = {}: must be at least 1",
            config.fixed_round_count
        )));
    }

    if config.parallelism < 1 {
        return Err(CoverageEnsembleError::config(format!(
            "parallelism = {}: must be at least 1",
            config.parallelism
        )));
    }

    Ok(())
}

/// Validate that the coverage percentage lies strictly between 0 and 100.
///
/// 100 is disallowed because it implies an infinite round count.
pub fn validate_coverage_percent(coverage_percent: f64) -> Result<()> {
    if !coverage_percent.is_finite() || coverage_percent <= 0.0 || coverage_percent >= 100.0 {
        return Err(CoverageEnsembleError::config(format!(
            "coverage_percent = {}: must be strictly between 0 and 100",
            coverage_percent
        )));
    }
    Ok(())
}
