//! Combination of member predictions into one final distribution.

use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::types::Score;
use crate::dataset::Instance;
use crate::ensemble::Ensemble;
use ndarray::Array1;

/// Tolerance below which a summed distribution counts as zero.
const ZERO_SUM_TOLERANCE: Score = 1e-6;

/// Combines per-model probability vectors by summing and normalizing.
///
/// Pure function over the ensemble and instance: no side effects, and
/// deterministic given identical inputs.
#[derive(Debug)]
pub struct PredictionAggregator;

impl PredictionAggregator {
    /// Combined probability distribution over classes for the instance.
    ///
    /// Sums every member's distribution element-wise and normalizes the
    /// result to 1. A (numerically) zero sum is returned unchanged rather
    /// than divided. A member distribution whose length differs from the
    /// label space is a fatal internal error, not user-recoverable.
    pub fn predict(ensemble: &Ensemble, instance: &Instance) -> Result<Array1<Score>> {
        let num_classes = ensemble.target().num_classes().ok_or_else(|| {
            CoverageEnsembleError::unsupported_target(
                "numeric class attribute is not supported",
            )
        })?;

        let mut sums = Array1::<Score>::zeros(num_classes);
        for model in ensemble.iter() {
            let probs = model.predict_distribution(instance)?;
            if probs.len() != num_classes {
                return Err(CoverageEnsembleError::internal(format!(
                    "member distribution has {} entries, label space has {} classes",
                    probs.len(),
                    num_classes
                )));
            }
            sums += &probs;
        }

        let total = sums.sum();
        if total.abs() < ZERO_SUM_TOLERANCE {
            return Ok(sums);
        }
        Ok(sums / total)
    }
}
