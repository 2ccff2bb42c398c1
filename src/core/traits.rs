//! Core trait definitions for the coverage-based resampling ensemble.
//!
//! This module defines the trait seams between the meta-algorithm and its
//! collaborators: the opaque base model trained once per round, the factory
//! producing fresh base-model instances, and the resampling strategy that
//! supplies one balanced training subset per round.

use crate::core::error::Result;
use crate::core::types::{RoundIndex, Score};
use crate::dataset::{Dataset, Instance};
use ndarray::Array1;
use std::fmt::Debug;

/// Opaque trainable base model consumed by the ensemble.
///
/// A base model is trained exactly once, on the balanced subset of its
/// round, and afterwards only queried for per-class probability estimates.
/// Implementations must be safe to train on worker threads and to query
/// concurrently at prediction time.
pub trait BaseModel: Send + Sync + Debug {
    /// Stable identifier of the base model kind.
    ///
    /// Ensembles carry this tag and compare it by equality when merging;
    /// two ensembles are merge-compatible only if their kinds match.
    fn kind(&self) -> &'static str;

    /// Seed the model's internal randomness, if any.
    ///
    /// Called with the pre-derived per-round seed before `train`. Models
    /// without internal randomness can rely on the default no-op.
    fn set_seed(&mut self, _seed: u64) {}

    /// Train the model on the given dataset.
    ///
    /// Failures are propagated unchanged to the ensemble `train` call.
    fn train(&mut self, data: &Dataset) -> Result<()>;

    /// Probability distribution over classes for the given instance.
    ///
    /// The returned vector length must equal the number of classes of the
    /// training label space.
    fn predict_distribution(&self, instance: &Instance) -> Result<Array1<Score>>;

    /// Human-readable description of the trained model.
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

/// Factory producing fresh base-model instances, one per round.
pub trait ModelFactory: Send + Sync {
    /// Create an untrained base model.
    fn create(&self) -> Box<dyn BaseModel>;

    /// Kind tag of the models this factory produces.
    fn kind(&self) -> &'static str;
}

/// Strategy supplying one training subset per resampling round.
///
/// Implementations must be re-entrant: `sample` may be invoked for
/// distinct rounds from concurrent worker threads, and identical inputs
/// (same strategy state, same round index) must yield identical subsets.
pub trait ResamplingStrategy: Send + Sync {
    /// Produce the training subset for the given round.
    fn sample(&self, round: RoundIndex) -> Result<Dataset>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TargetType;
    use crate::dataset::Dataset;

    #[derive(Debug)]
    struct NullModel;

    impl BaseModel for NullModel {
        fn kind(&self) -> &'static str {
            "null"
        }

        fn train(&mut self, _data: &Dataset) -> Result<()> {
            Ok(())
        }

        fn predict_distribution(&self, _instance: &Instance) -> Result<Array1<Score>> {
            Ok(Array1::zeros(2))
        }
    }

    #[test]
    fn test_default_set_seed_is_noop() {
        let mut model = NullModel;
        model.set_seed(42);
        assert_eq!(model.kind(), "null");
    }

    #[test]
    fn test_default_describe_uses_debug() {
        let model = NullModel;
        assert_eq!(model.describe(), "NullModel");
    }

    #[test]
    fn test_base_model_is_object_safe() {
        let boxed: Box<dyn BaseModel> = Box::new(NullModel);
        let data = Dataset::new(Vec::new(), TargetType::Categorical { num_classes: 2 });
        assert!(data.is_ok());
        assert_eq!(boxed.kind(), "null");
    }
}
