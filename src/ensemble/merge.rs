//! Merging of independently trained ensembles.
//!
//! Two surfaces with the same semantics: the two-phase
//! `aggregate`/`finalize_aggregation` protocol on [`Ensemble`], and the
//! [`EnsembleMergeBuilder`] which accumulates owned ensembles and produces
//! an immutable merged ensemble on `build()`.
//!
//! The intended use is combining ensembles trained on disjoint data
//! partitions into one larger ensemble without retraining.

use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::traits::BaseModel;
use crate::core::types::TargetType;
use crate::ensemble::Ensemble;

impl Ensemble {
    /// Append another ensemble's models into this ensemble's pending-merge
    /// cache.
    ///
    /// Fails with `IncompatibleBaseModel` when the kind tags differ,
    /// leaving the receiver unmodified. On the first call the cache is
    /// initialized from the receiver's current models; further calls
    /// accumulate, so several ensembles can be aggregated before a single
    /// [`finalize_aggregation`](Ensemble::finalize_aggregation).
    ///
    /// While a cache is pending, the receiver must not be read as the
    /// definitive ensemble.
    pub fn aggregate(&mut self, other: Ensemble) -> Result<&mut Self> {
        if self.model_kind() != other.model_kind() {
            return Err(CoverageEnsembleError::incompatible_base_model(
                self.model_kind(),
                other.model_kind(),
            ));
        }

        if self.merge_cache.is_none() {
            let current = self.take_models();
            self.merge_cache = Some(current);
        }
        let appended = other.num_models();
        if let Some(cache) = self.merge_cache.as_mut() {
            cache.extend(other.into_models());
        }
        log::debug!(
            "aggregated {} models into pending merge cache",
            appended
        );

        Ok(self)
    }

    /// Commit the pending-merge cache as the new model list.
    ///
    /// Sets the round count to the new list length and clears the cache.
    /// Fails with `InvalidMergeState` when no cache exists, which means
    /// `aggregate` was never called.
    pub fn finalize_aggregation(&mut self) -> Result<()> {
        let cache = self.merge_cache.take().ok_or_else(|| {
            CoverageEnsembleError::invalid_merge_state(
                "finalize_aggregation called without a prior aggregate",
            )
        })?;
        self.replace_models(cache);
        log::info!(
            "merge finalized: ensemble now holds {} models",
            self.num_models()
        );
        Ok(())
    }
}

/// Builder that merges owned ensembles into a new immutable ensemble.
///
/// Unlike the two-phase protocol there is no uncommitted state: the source
/// ensembles are consumed, and nothing observable exists until `build()`
/// returns the merged result.
#[derive(Debug)]
pub struct EnsembleMergeBuilder {
    models: Vec<Box<dyn BaseModel>>,
    model_kind: String,
    target: TargetType,
}

impl EnsembleMergeBuilder {
    /// Start a merge from an initial ensemble.
    pub fn new(initial: Ensemble) -> Self {
        let model_kind = initial.model_kind().to_string();
        let target = initial.target();
        EnsembleMergeBuilder {
            models: initial.into_models(),
            model_kind,
            target,
        }
    }

    /// Append another ensemble's models, in order.
    ///
    /// Fails with `IncompatibleBaseModel` when the kind tags differ; the
    /// builder is unchanged in that case.
    pub fn merge(mut self, other: Ensemble) -> Result<Self> {
        if self.model_kind != other.model_kind() {
            return Err(CoverageEnsembleError::incompatible_base_model(
                self.model_kind.as_str(),
                other.model_kind(),
            ));
        }
        self.models.extend(other.into_models());
        Ok(self)
    }

    /// Number of models accumulated so far.
    pub fn num_models(&self) -> usize {
        self.models.len()
    }

    /// Produce the merged ensemble.
    pub fn build(self) -> Result<Ensemble> {
        Ensemble::new(self.models, self.model_kind, self.target)
    }
}
