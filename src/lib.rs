//! # Coverage Ensemble
//!
//! A coverage-based resampling ensemble for class-imbalanced
//! classification, implemented in pure Rust.
//!
//! The ensemble repeatedly builds balanced training subsets by combining
//! every minority-class instance with a randomly undersampled subset of
//! each other class, trains one base model per subset, and combines
//! predictions by summing and normalizing per-class probability
//! estimates. The number of resampling rounds is derived from a target
//! coverage probability of the majority class, or fixed by configuration.
//! Two independently trained ensembles (for example, from disjoint data
//! shards) can be merged into one without retraining.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coverage_ensemble::{
//!     Dataset, EnsembleTrainer, Instance, ModelFactory, TargetType, TrainingConfig,
//! };
//! use ndarray::array;
//!
//! # fn factory() -> Box<dyn ModelFactory> { unimplemented!() }
//! # fn main() -> coverage_ensemble::Result<()> {
//! // Assemble an imbalanced two-class dataset.
//! let instances = vec![
//!     Instance::new(array![1.0, 2.0], 0.0),
//!     Instance::new(array![2.0, 3.0], 0.0),
//!     Instance::new(array![3.0, 4.0], 0.0),
//!     Instance::new(array![9.0, 9.0], 1.0),
//! ];
//! let dataset = Dataset::new(instances, TargetType::Categorical { num_classes: 2 })?;
//!
//! // Aim for 95% majority-class coverage, training rounds on four workers.
//! let config = TrainingConfig::builder()
//!     .coverage_percent(95.0)
//!     .parallelism(4)
//!     .build()?;
//!
//! let factory = factory();
//! let trainer = EnsembleTrainer::new(factory.as_ref(), config);
//! let ensemble = trainer.train(&dataset)?;
//!
//! let probe = Instance::new(array![2.5, 3.5], 0.0);
//! let distribution = ensemble.predict_distribution(&probe)?;
//! println!("class distribution: {:?}", distribution);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error taxonomy, fundamental types, and the trait seams for
//!   base models, model factories, and resampling strategies
//! - [`config`]: training configuration, builder, and validation
//! - [`dataset`]: labeled instances, datasets, and per-class partitioning
//! - [`sampling`]: coverage round-count derivation and balanced subset
//!   sampling
//! - [`ensemble`]: training orchestration, the trained ensemble, and
//!   ensemble merging
//! - [`prediction`]: combination of member predictions
//!
//! The base learner itself is deliberately outside this crate: it is an
//! opaque collaborator behind the [`BaseModel`] trait, trained once per
//! round and queried for per-class probability estimates.

#![doc(html_root_url = "https://docs.rs/coverage-ensemble/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset management module
pub mod dataset;

// Subset sampling module
pub mod sampling;

// Ensemble training and merge module
pub mod ensemble;

// Prediction module
pub mod prediction;

// Re-export core functionality for convenience
pub use crate::core::{
    error::{CoverageEnsembleError, Result},
    traits::{BaseModel, ModelFactory, ResamplingStrategy},
    types::{ClassIndex, Label, RoundIndex, Score, TargetType},
};

// Re-export configuration functionality
pub use config::{TrainingConfig, TrainingConfigBuilder};

// Re-export dataset functionality
pub use dataset::{ClassPartition, Dataset, Instance};

// Re-export sampling functionality
pub use sampling::{rounds_for_coverage, BalancedSubsetSampler};

// Re-export ensemble functionality
pub use ensemble::{Ensemble, EnsembleMergeBuilder, EnsembleTrainer};

// Re-export prediction functionality
pub use prediction::PredictionAggregator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_reexport() {
        let config = TrainingConfig::builder()
            .coverage_percent(80.0)
            .base_seed(3)
            .build()
            .unwrap();
        assert_eq!(config.coverage_percent, 80.0);
        assert_eq!(config.base_seed, 3);
    }

    #[test]
    fn test_error_reexport() {
        let err = CoverageEnsembleError::config("bad value");
        assert_eq!(err.category(), "invalid_configuration");
    }

    #[test]
    fn test_coverage_reexport() {
        assert_eq!(rounds_for_coverage(0.5, 90.0).unwrap(), 4);
    }
}
