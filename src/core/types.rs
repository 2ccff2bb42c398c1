//! Core data types for the coverage-based resampling ensemble.
//!
//! This module defines the fundamental type aliases and enumerations shared
//! across the crate, keeping numeric widths consistent between dataset
//! storage, sampling, and prediction aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target value and sample weight type.
/// 32-bit float for class labels (stored as class indices) and instance weights.
pub type Label = f32;

/// Probability accumulation type.
/// 64-bit float providing numerical stability when summing many member
/// distributions.
pub type Score = f64;

/// Class index type identifying a class in the categorical label space.
pub type ClassIndex = usize;

/// Round index type for resampling rounds.
pub type RoundIndex = usize;

/// Target attribute type of a dataset.
///
/// Only categorical targets are supported by the ensemble; the numeric
/// variant exists so that training and prediction entry points can reject
/// regression data explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    /// Categorical target with a fixed, finite number of classes.
    Categorical {
        /// Number of classes in the label space.
        num_classes: usize,
    },
    /// Numeric (continuous) target. Unsupported for training and prediction.
    Numeric,
}

impl TargetType {
    /// Returns the number of classes, or `None` for numeric targets.
    pub fn num_classes(&self) -> Option<usize> {
        match self {
            TargetType::Categorical { num_classes } => Some(*num_classes),
            TargetType::Numeric => None,
        }
    }

    /// Whether this target is categorical.
    pub fn is_categorical(&self) -> bool {
        matches!(self, TargetType::Categorical { .. })
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Categorical { num_classes } => {
                write!(f, "categorical({})", num_classes)
            }
            TargetType::Numeric => write!(f, "numeric"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_num_classes() {
        let t = TargetType::Categorical { num_classes: 3 };
        assert_eq!(t.num_classes(), Some(3));
        assert!(t.is_categorical());

        let n = TargetType::Numeric;
        assert_eq!(n.num_classes(), None);
        assert!(!n.is_categorical());
    }

    #[test]
    fn test_target_type_display() {
        assert_eq!(
            format!("{}", TargetType::Categorical { num_classes: 2 }),
            "categorical(2)"
        );
        assert_eq!(format!("{}", TargetType::Numeric), "numeric");
    }
}
