//! Trained ensemble container.
//!
//! An ensemble owns its trained base models in round order, the round
//! count that produced them, and the kind tag used for merge
//! compatibility checks.

use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::traits::BaseModel;
use crate::core::types::{Score, TargetType};
use crate::dataset::Instance;
use ndarray::Array1;

/// An ordered sequence of trained base models plus the round count that
/// produced it.
///
/// Ownership is exclusive to the entity holding it: a single training run,
/// or the result of a merge. The model count equals the recorded round
/// count at all times except during the transient merge-cache window (see
/// [`Ensemble::aggregate`]).
#[derive(Debug)]
pub struct Ensemble {
    models: Vec<Box<dyn BaseModel>>,
    num_rounds: usize,
    model_kind: String,
    target: TargetType,
    pub(crate) merge_cache: Option<Vec<Box<dyn BaseModel>>>,
}

impl Ensemble {
    /// Create an ensemble from trained models in round order.
    ///
    /// Validates that at least one model is present and that every model
    /// carries the declared kind tag.
    pub fn new(
        models: Vec<Box<dyn BaseModel>>,
        model_kind: impl Into<String>,
        target: TargetType,
    ) -> Result<Self> {
        let model_kind = model_kind.into();
        if models.is_empty() {
            return Err(CoverageEnsembleError::config(
                "ensemble must contain at least one model",
            ));
        }
        for model in &models {
            if model.kind() != model_kind {
                return Err(CoverageEnsembleError::internal(format!(
                    "model of kind '{}' in ensemble tagged '{}'",
                    model.kind(),
                    model_kind
                )));
            }
        }

        let num_rounds = models.len();
        Ok(Ensemble {
            models,
            num_rounds,
            model_kind,
            target,
            merge_cache: None,
        })
    }

    /// Number of trained models.
    pub fn num_models(&self) -> usize {
        self.models.len()
    }

    /// Round count recorded for this ensemble.
    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    /// Kind tag of the base models.
    pub fn model_kind(&self) -> &str {
        &self.model_kind
    }

    /// Target description the ensemble was trained against.
    pub fn target(&self) -> TargetType {
        self.target
    }

    /// Trained models in round order.
    pub fn models(&self) -> &[Box<dyn BaseModel>] {
        &self.models
    }

    /// Iterate over trained models in round order.
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn BaseModel>> {
        self.models.iter()
    }

    /// Whether an uncommitted merge cache exists.
    pub fn has_pending_merge(&self) -> bool {
        self.merge_cache.is_some()
    }

    /// Combined probability distribution for the given instance.
    ///
    /// Convenience wrapper around
    /// [`PredictionAggregator::predict`](crate::prediction::PredictionAggregator::predict).
    pub fn predict_distribution(&self, instance: &Instance) -> Result<Array1<Score>> {
        crate::prediction::PredictionAggregator::predict(self, instance)
    }

    /// Human-readable description of all member models.
    pub fn describe(&self) -> String {
        if self.models.is_empty() {
            return "No model built yet.".to_string();
        }
        let mut text = String::from("All the base models:\n\n");
        for model in &self.models {
            text.push_str(&model.describe());
            text.push_str("\n\n");
        }
        text
    }

    /// Replace the model list, keeping the round count in sync.
    pub(crate) fn replace_models(&mut self, models: Vec<Box<dyn BaseModel>>) {
        self.num_rounds = models.len();
        self.models = models;
    }

    /// Take the model list out, leaving the ensemble empty.
    pub(crate) fn take_models(&mut self) -> Vec<Box<dyn BaseModel>> {
        std::mem::take(&mut self.models)
    }

    /// Consume the ensemble and return its models in round order.
    pub fn into_models(self) -> Vec<Box<dyn BaseModel>> {
        self.models
    }
}
