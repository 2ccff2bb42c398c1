//! Error handling and error types for the coverage-based resampling ensemble.
//!
//! This module provides the crate-wide error taxonomy using Rust's Result
//! type system. All validation failures are detected eagerly, before any
//! sampling or training work begins, so a failed `train` call never leaves
//! a partial ensemble behind.

use std::io;
use thiserror::Error;

/// Main error type for the coverage-ensemble library.
///
/// This enum covers all error conditions that can occur during dataset
/// construction, subset sampling, ensemble training, prediction, and
/// ensemble merging.
#[derive(Error, Debug)]
pub enum CoverageEnsembleError {
    /// The dataset or instance carries a numeric (continuous) class attribute.
    #[error("Unsupported target type: {message}")]
    UnsupportedTargetType { message: String },

    /// Configuration and validation errors (coverage percent out of range, etc.)
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A non-minority class has fewer instances than the minority class,
    /// making balanced sampling impossible.
    #[error("Insufficient class size: class {class} has {actual} instances, balanced sampling requires {required}")]
    InsufficientClassSize {
        class: usize,
        actual: usize,
        required: usize,
    },

    /// Merge attempted between ensembles built from different base model kinds.
    #[error("Incompatible base model: receiver holds '{receiver}', other holds '{other}'")]
    IncompatibleBaseModel { receiver: String, other: String },

    /// `finalize_aggregation` called without a pending merge cache.
    #[error("Invalid merge state: {message}")]
    InvalidMergeState { message: String },

    /// Dataset-related errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Base-model training failures, propagated unchanged.
    #[error("Training error: {message}")]
    Training { message: String },

    /// Base-model prediction failures, propagated unchanged.
    #[error("Prediction error: {message}")]
    Prediction { message: String },

    /// Thread pool construction and synchronization errors
    #[error("Threading error: {message}")]
    Threading { message: String },

    /// Configuration serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using CoverageEnsembleError
pub type Result<T> = std::result::Result<T, CoverageEnsembleError>;

/// Utility functions for error handling
impl CoverageEnsembleError {
    /// Create an unsupported-target-type error
    pub fn unsupported_target<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::UnsupportedTargetType {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an insufficient-class-size error
    pub fn insufficient_class_size(class: usize, actual: usize, required: usize) -> Self {
        CoverageEnsembleError::InsufficientClassSize {
            class,
            actual,
            required,
        }
    }

    /// Create an incompatible-base-model error
    pub fn incompatible_base_model<R, O>(receiver: R, other: O) -> Self
    where
        R: Into<String>,
        O: Into<String>,
    {
        CoverageEnsembleError::IncompatibleBaseModel {
            receiver: receiver.into(),
            other: other.into(),
        }
    }

    /// Create an invalid-merge-state error
    pub fn invalid_merge_state<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::InvalidMergeState {
            message: message.into(),
        }
    }

    /// Create a dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::Dataset {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        CoverageEnsembleError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a training error
    pub fn training<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::Training {
            message: message.into(),
        }
    }

    /// Create a prediction error
    pub fn prediction<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::Prediction {
            message: message.into(),
        }
    }

    /// Create a threading error
    pub fn threading<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::Threading {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        CoverageEnsembleError::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CoverageEnsembleError::UnsupportedTargetType { .. } => false,
            CoverageEnsembleError::InvalidConfiguration { .. } => false,
            CoverageEnsembleError::InsufficientClassSize { .. } => false,
            CoverageEnsembleError::IncompatibleBaseModel { .. } => false,
            CoverageEnsembleError::InvalidMergeState { .. } => false,
            CoverageEnsembleError::Dataset { .. } => false,
            CoverageEnsembleError::DimensionMismatch { .. } => false,
            CoverageEnsembleError::Training { .. } => true,
            CoverageEnsembleError::Prediction { .. } => true,
            CoverageEnsembleError::Threading { .. } => true,
            CoverageEnsembleError::Serialization { .. } => false,
            CoverageEnsembleError::IO { .. } => false,
            CoverageEnsembleError::Json { .. } => false,
            CoverageEnsembleError::Internal { .. } => false,
        }
    }

    /// Get error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            CoverageEnsembleError::UnsupportedTargetType { .. } => "unsupported_target_type",
            CoverageEnsembleError::InvalidConfiguration { .. } => "invalid_configuration",
            CoverageEnsembleError::InsufficientClassSize { .. } => "insufficient_class_size",
            CoverageEnsembleError::IncompatibleBaseModel { .. } => "incompatible_base_model",
            CoverageEnsembleError::InvalidMergeState { .. } => "invalid_merge_state",
            CoverageEnsembleError::Dataset { .. } => "dataset",
            CoverageEnsembleError::DimensionMismatch { .. } => "dimension_mismatch",
            CoverageEnsembleError::Training { .. } => "training",
            CoverageEnsembleError::Prediction { .. } => "prediction",
            CoverageEnsembleError::Threading { .. } => "threading",
            CoverageEnsembleError::Serialization { .. } => "serialization",
            CoverageEnsembleError::IO { .. } => "io",
            CoverageEnsembleError::Json { .. } => "json",
            CoverageEnsembleError::Internal { .. } => "internal",
        }
    }
}
