//! Balanced per-round subset sampling.
//!
//! Each round combines every minority-class instance with exactly
//! `minority_size` instances drawn without replacement from every other
//! class. Rounds are seeded independently from the base seed, so sampling
//! is deterministic and safe to run from concurrent worker threads.

use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::traits::ResamplingStrategy;
use crate::core::types::{RoundIndex, TargetType};
use crate::dataset::{ClassPartition, Dataset, Instance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Sampler producing one balanced training subset per round.
///
/// Holds only shared read-only state; every `sample` call owns its
/// round-local generator and output, so the sampler is re-entrant by
/// construction.
#[derive(Debug)]
pub struct BalancedSubsetSampler<'a> {
    partition: &'a ClassPartition,
    target: TargetType,
    base_seed: u64,
}

impl<'a> BalancedSubsetSampler<'a> {
    /// Create a sampler over a class partition.
    pub fn new(partition: &'a ClassPartition, target: TargetType, base_seed: u64) -> Self {
        BalancedSubsetSampler {
            partition,
            target,
            base_seed,
        }
    }

    /// Check that balanced sampling can terminate for every round.
    ///
    /// Every non-minority class must hold at least `minority_size`
    /// instances; otherwise drawing that many distinct indices would never
    /// complete. Must pass before any training starts.
    pub fn validate(&self) -> Result<()> {
        let minority = self.partition.minority_index()?;
        let minority_size = self.partition.minority_size()?;

        for class in 0..self.partition.num_classes() {
            if class == minority {
                continue;
            }
            let available = self.partition.class(class)?.len();
            if available < minority_size {
                return Err(CoverageEnsembleError::insufficient_class_size(
                    class,
                    available,
                    minority_size,
                ));
            }
        }
        Ok(())
    }

    /// Draw `count` distinct indices in `[0, upper)` by rejection sampling.
    ///
    /// The ordered set gives deterministic iteration, so identical seeds
    /// yield identical subsets, not just identical index sets.
    fn draw_distinct(rng: &mut StdRng, upper: usize, count: usize) -> BTreeSet<usize> {
        let mut selected = BTreeSet::new();
        while selected.len() < count {
            selected.insert(rng.gen_range(0..upper));
        }
        selected
    }
}

impl ResamplingStrategy for BalancedSubsetSampler<'_> {
    /// Produce the balanced subset for the given round.
    ///
    /// The minority class is recomputed from the partition on every call so
    /// all rounds reflect the same training partition. All selected
    /// instances are copied into the fresh subset; downstream mutation by a
    /// base learner can never reach the shared partition.
    fn sample(&self, round: RoundIndex) -> Result<Dataset> {
        let minority = self.partition.minority_index()?;
        let minority_size = self.partition.minority_size()?;

        let mut rng = StdRng::seed_from_u64(self.base_seed.wrapping_add(round as u64));
        let mut instances: Vec<Instance> =
            Vec::with_capacity(minority_size * self.partition.num_classes());

        instances.extend_from_slice(self.partition.class(minority)?);

        for class in 0..self.partition.num_classes() {
            if class == minority {
                continue;
            }
            let available = self.partition.class(class)?;
            if available.len() < minority_size {
                return Err(CoverageEnsembleError::insufficient_class_size(
                    class,
                    available.len(),
                    minority_size,
                ));
            }
            for index in Self::draw_distinct(&mut rng, available.len(), minority_size) {
                instances.push(available[index].clone());
            }
        }

        Dataset::new(instances, self.target)
    }
}
