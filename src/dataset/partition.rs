//! Per-class partitioning of a training dataset.
//!
//! The partition is built once per training run in a single pass, is
//! read-only afterwards, and is safe to share across worker threads while
//! subsets are sampled.

use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::types::ClassIndex;
use crate::dataset::{Dataset, Instance};

/// Mapping from class index to the ordered list of instances of that class.
///
/// Every class index of the label space has an entry, possibly empty. The
/// per-class weighted counts are cached at construction so minority and
/// majority selection does not rescan the instance lists.
#[derive(Debug, Clone)]
pub struct ClassPartition {
    classes: Vec<Vec<Instance>>,
    weighted_counts: Vec<f64>,
}

impl ClassPartition {
    /// Split a dataset into per-class instance lists. Single pass, O(n).
    ///
    /// Fails with `UnsupportedTargetType` for numeric targets and
    /// defensively on malformed class indices.
    pub fn from_dataset(data: &Dataset) -> Result<Self> {
        let num_classes = data.num_classes()?;
        let mut classes: Vec<Vec<Instance>> = vec![Vec::new(); num_classes];
        let mut weighted_counts = vec![0.0f64; num_classes];

        for instance in data.iter() {
            let class = instance.class_index(num_classes)?;
            weighted_counts[class] += instance.weight() as f64;
            classes[class].push(instance.clone());
        }

        Ok(ClassPartition {
            classes,
            weighted_counts,
        })
    }

    /// Number of classes in the label space.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Instances of the given class, in dataset order.
    pub fn class(&self, class: ClassIndex) -> Result<&[Instance]> {
        self.classes
            .get(class)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                CoverageEnsembleError::internal(format!(
                    "class {} out of bounds for partition of {} classes",
                    class,
                    self.classes.len()
                ))
            })
    }

    /// Weighted instance count of the given class.
    pub fn weighted_count(&self, class: ClassIndex) -> Result<f64> {
        self.weighted_counts.get(class).copied().ok_or_else(|| {
            CoverageEnsembleError::internal(format!(
                "class {} out of bounds for partition of {} classes",
                class,
                self.classes.len()
            ))
        })
    }

    /// Class with the smallest weighted count among classes that are present.
    ///
    /// Absent classes are skipped: an empty class would otherwise always win
    /// the argmin and force empty subsets. They are instead rejected by the
    /// sampling feasibility check before training.
    pub fn minority_index(&self) -> Result<ClassIndex> {
        self.present_classes()
            .min_by(|&(_, a), &(_, b)| a.total_cmp(&b))
            .map(|(class, _)| class)
            .ok_or_else(|| CoverageEnsembleError::dataset("dataset has no instances"))
    }

    /// Class with the largest weighted count.
    pub fn majority_index(&self) -> Result<ClassIndex> {
        self.present_classes()
            .max_by(|&(_, a), &(_, b)| a.total_cmp(&b))
            .map(|(class, _)| class)
            .ok_or_else(|| CoverageEnsembleError::dataset("dataset has no instances"))
    }

    /// Number of instances of the minority class.
    ///
    /// This is the balanced per-class subset size: every other class is
    /// undersampled to exactly this many instances per round.
    pub fn minority_size(&self) -> Result<usize> {
        let minority = self.minority_index()?;
        Ok(self.classes[minority].len())
    }

    /// Ratio of minority to majority weighted counts, in (0, 1].
    pub fn minority_share(&self) -> Result<f64> {
        let minority = self.weighted_count(self.minority_index()?)?;
        let majority = self.weighted_count(self.majority_index()?)?;
        Ok(minority / majority)
    }

    fn present_classes(&self) -> impl Iterator<Item = (ClassIndex, f64)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .filter(|(_, instances)| !instances.is_empty())
            .map(|(class, _)| (class, self.weighted_counts[class]))
    }
}
