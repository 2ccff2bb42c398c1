//! Core dataset structures for the coverage-based resampling ensemble.
//!
//! This module provides the labeled `Instance` and the owning `Dataset`
//! collection consumed by subset sampling and base-model training.

use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::types::{ClassIndex, Label, TargetType};
use ndarray::Array1;

/// A single labeled instance: feature vector, class label, and weight.
///
/// The label stores the class index for categorical targets (or the raw
/// target value for numeric ones, which the ensemble rejects). The weight
/// defaults to 1.0 and participates in the per-class weighted histogram
/// that drives minority/majority selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    features: Array1<f32>,
    label: Label,
    weight: Label,
}

impl Instance {
    /// Create a new instance with unit weight.
    pub fn new(features: Array1<f32>, label: Label) -> Self {
        Instance {
            features,
            label,
            weight: 1.0,
        }
    }

    /// Create a new instance with an explicit weight.
    pub fn with_weight(features: Array1<f32>, label: Label, weight: Label) -> Self {
        Instance {
            features,
            label,
            weight,
        }
    }

    /// Feature vector of this instance.
    pub fn features(&self) -> &Array1<f32> {
        &self.features
    }

    /// Raw label value.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Instance weight.
    pub fn weight(&self) -> Label {
        self.weight
    }

    /// Number of features.
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Class index of this instance within a label space of `num_classes`.
    ///
    /// Fails defensively when the label is not an integral value inside
    /// `0..num_classes`.
    pub fn class_index(&self, num_classes: usize) -> Result<ClassIndex> {
        let label = self.label;
        if !label.is_finite() || label.fract() != 0.0 || label < 0.0 {
            return Err(CoverageEnsembleError::dataset(format!(
                "label {} is not a valid class index",
                label
            )));
        }
        let index = label as usize;
        if index >= num_classes {
            return Err(CoverageEnsembleError::dataset(format!(
                "class index {} out of bounds for {} classes",
                index, num_classes
            )));
        }
        Ok(index)
    }
}

/// An ordered collection of instances sharing one label space.
#[derive(Debug, Clone)]
pub struct Dataset {
    instances: Vec<Instance>,
    target: TargetType,
}

impl Dataset {
    /// Create a new dataset from instances and a target description.
    ///
    /// Validates that all instances carry the same number of features and,
    /// for categorical targets, that every label is a valid class index.
    pub fn new(instances: Vec<Instance>, target: TargetType) -> Result<Self> {
        if let Some(first) = instances.first() {
            let num_features = first.num_features();
            for (i, instance) in instances.iter().enumerate() {
                if instance.num_features() != num_features {
                    return Err(CoverageEnsembleError::dimension_mismatch(
                        format!("{} features", num_features),
                        format!("{} features at instance {}", instance.num_features(), i),
                    ));
                }
            }
        }

        if let TargetType::Categorical { num_classes } = target {
            if num_classes == 0 {
                return Err(CoverageEnsembleError::dataset(
                    "categorical target must have at least one class",
                ));
            }
            for instance in &instances {
                instance.class_index(num_classes)?;
            }
        }

        Ok(Dataset { instances, target })
    }

    /// Number of instances.
    pub fn num_instances(&self) -> usize {
        self.instances.len()
    }

    /// Whether the dataset holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Target description of this dataset.
    pub fn target(&self) -> TargetType {
        self.target
    }

    /// Number of classes of the label space.
    ///
    /// Fails with `UnsupportedTargetType` for numeric targets.
    pub fn num_classes(&self) -> Result<usize> {
        self.target.num_classes().ok_or_else(|| {
            CoverageEnsembleError::unsupported_target(
                "numeric class attribute is not supported",
            )
        })
    }

    /// Number of features, or `None` for an empty dataset.
    pub fn num_features(&self) -> Option<usize> {
        self.instances.first().map(Instance::num_features)
    }

    /// Instances in order.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Iterate over instances.
    pub fn iter(&self) -> std::slice::Iter<'_, Instance> {
        self.instances.iter()
    }

    /// Per-class weighted instance counts.
    ///
    /// Every class index of the label space gets an entry, zero for absent
    /// classes. Fails with `UnsupportedTargetType` for numeric targets.
    pub fn class_histogram(&self) -> Result<Vec<f64>> {
        let num_classes = self.num_classes()?;
        let mut histogram = vec![0.0f64; num_classes];
        for instance in &self.instances {
            let class = instance.class_index(num_classes)?;
            histogram[class] += instance.weight() as f64;
        }
        Ok(histogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn categorical(num_classes: usize) -> TargetType {
        TargetType::Categorical { num_classes }
    }

    #[test]
    fn test_instance_accessors() {
        let instance = Instance::new(array![1.0, 2.0], 1.0);
        assert_eq!(instance.num_features(), 2);
        assert_eq!(instance.label(), 1.0);
        assert_eq!(instance.weight(), 1.0);

        let weighted = Instance::with_weight(array![0.5], 0.0, 2.5);
        assert_eq!(weighted.weight(), 2.5);
    }

    #[test]
    fn test_class_index_bounds() {
        let instance = Instance::new(array![1.0], 2.0);
        assert_eq!(instance.class_index(3).unwrap(), 2);
        assert!(instance.class_index(2).is_err());

        let fractional = Instance::new(array![1.0], 0.5);
        assert!(fractional.class_index(2).is_err());

        let negative = Instance::new(array![1.0], -1.0);
        assert!(negative.class_index(2).is_err());
    }

    #[test]
    fn test_dataset_validates_feature_dimensions() {
        let instances = vec![
            Instance::new(array![1.0, 2.0], 0.0),
            Instance::new(array![1.0], 1.0),
        ];
        let result = Dataset::new(instances, categorical(2));
        assert!(matches!(
            result,
            Err(CoverageEnsembleError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_dataset_validates_labels() {
        let instances = vec![Instance::new(array![1.0], 5.0)];
        assert!(Dataset::new(instances, categorical(2)).is_err());
    }

    #[test]
    fn test_class_histogram_weighted() {
        let instances = vec![
            Instance::new(array![1.0], 0.0),
            Instance::with_weight(array![2.0], 0.0, 2.0),
            Instance::new(array![3.0], 2.0),
        ];
        let dataset = Dataset::new(instances, categorical(3)).unwrap();
        let histogram = dataset.class_histogram().unwrap();
        assert_eq!(histogram, vec![3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_numeric_target_rejected_for_histogram() {
        let instances = vec![Instance::new(array![1.0], 3.7)];
        let dataset = Dataset::new(instances, TargetType::Numeric).unwrap();
        assert!(matches!(
            dataset.class_histogram(),
            Err(CoverageEnsembleError::UnsupportedTargetType { .. })
        ));
        assert!(dataset.num_classes().is_err());
    }
}
