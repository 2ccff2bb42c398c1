//! Training orchestration for the coverage-based resampling ensemble.
//!
//! The trainer owns validation, round-count derivation, per-model seed
//! derivation, and worker-pool dispatch. Subset generation is delegated to
//! a [`ResamplingStrategy`], so the orchestration is independent of how
//! subsets are produced.

use crate::config::TrainingConfig;
use crate::core::error::{CoverageEnsembleError, Result};
use crate::core::traits::{BaseModel, ModelFactory, ResamplingStrategy};
use crate::dataset::{ClassPartition, Dataset};
use crate::ensemble::Ensemble;
use crate::sampling::{rounds_for_coverage, BalancedSubsetSampler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Orchestrator training one base model per resampling round.
pub struct EnsembleTrainer<'a> {
    factory: &'a dyn ModelFactory,
    config: TrainingConfig,
}

impl std::fmt::Debug for EnsembleTrainer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnsembleTrainer")
            .field("model_kind", &self.factory.kind())
            .field("config", &self.config)
            .finish()
    }
}

impl<'a> EnsembleTrainer<'a> {
    /// Create a trainer for the given base-model factory and configuration.
    pub fn new(factory: &'a dyn ModelFactory, config: TrainingConfig) -> Self {
        EnsembleTrainer { factory, config }
    }

    /// Training configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train a full ensemble on the given dataset.
    ///
    /// All validation (target type, configuration, sampling feasibility)
    /// happens before any model is trained; a failed call never produces a
    /// partial ensemble.
    pub fn train(&self, data: &Dataset) -> Result<Ensemble> {
        if !data.target().is_categorical() {
            return Err(CoverageEnsembleError::unsupported_target(
                "numeric class attribute is not supported",
            ));
        }
        self.config.validate()?;

        let partition = ClassPartition::from_dataset(data)?;

        let rounds = if self.config.use_fixed_round_count {
            self.config.fixed_round_count
        } else {
            rounds_for_coverage(partition.minority_share()?, self.config.coverage_percent)?
        };

        let sampler = BalancedSubsetSampler::new(&partition, data.target(), self.config.base_seed);
        sampler.validate()?;

        log::info!(
            "training coverage ensemble: {} rounds, minority size {}, {} execution slots",
            rounds,
            partition.minority_size()?,
            self.config.parallelism
        );

        let models = self.train_rounds(&sampler, rounds)?;
        Ensemble::new(models, self.factory.kind(), data.target())
    }

    /// Train one base model per round over the given strategy.
    ///
    /// Per-model seeds are derived up front from a single generator seeded
    /// with the base seed and advanced once per model, so the seed sequence
    /// depends only on the base seed, never on execution order. The
    /// returned models are in round order regardless of which worker
    /// finished first.
    pub fn train_rounds(
        &self,
        strategy: &dyn ResamplingStrategy,
        rounds: usize,
    ) -> Result<Vec<Box<dyn BaseModel>>> {
        let mut seed_rng = StdRng::seed_from_u64(self.config.base_seed);
        let model_seeds: Vec<u64> = (0..rounds).map(|_| seed_rng.gen()).collect();

        if self.config.parallelism == 1 {
            model_seeds
                .into_iter()
                .enumerate()
                .map(|(round, seed)| self.train_round(strategy, round, seed))
                .collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.parallelism)
                .build()
                .map_err(|e| {
                    CoverageEnsembleError::threading(format!(
                        "failed to build worker pool: {}",
                        e
                    ))
                })?;
            pool.install(|| {
                model_seeds
                    .into_par_iter()
                    .enumerate()
                    .map(|(round, seed)| self.train_round(strategy, round, seed))
                    .collect()
            })
        }
    }

    fn train_round(
        &self,
        strategy: &dyn ResamplingStrategy,
        round: usize,
        seed: u64,
    ) -> Result<Box<dyn BaseModel>> {
        let subset = strategy.sample(round)?;
        log::debug!(
            "round {}: training on balanced subset of {} instances",
            round,
            subset.num_instances()
        );
        let mut model = self.factory.create();
        model.set_seed(seed);
        model.train(&subset)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TargetType;
    use crate::dataset::Instance;
    use ndarray::array;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every subset it is trained on, for orchestration assertions.
    #[derive(Debug)]
    struct RecordingModel {
        seed: Option<u64>,
        subset_labels: Vec<f32>,
    }

    impl BaseModel for RecordingModel {
        fn kind(&self) -> &'static str {
            "recording"
        }

        fn set_seed(&mut self, seed: u64) {
            self.seed = Some(seed);
        }

        fn train(&mut self, data: &Dataset) -> Result<()> {
            self.subset_labels = data.iter().map(Instance::label).collect();
            Ok(())
        }

        fn predict_distribution(
            &self,
            _instance: &Instance,
        ) -> Result<ndarray::Array1<f64>> {
            Ok(ndarray::Array1::zeros(2))
        }
    }

    struct RecordingFactory {
        created: AtomicUsize,
    }

    impl ModelFactory for RecordingFactory {
        fn create(&self) -> Box<dyn BaseModel> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Box::new(RecordingModel {
                seed: None,
                subset_labels: Vec::new(),
            })
        }

        fn kind(&self) -> &'static str {
            "recording"
        }
    }

    /// Fails training on a chosen round.
    struct FailingFactory {
        fail_from: usize,
        counter: AtomicUsize,
    }

    #[derive(Debug)]
    struct FailingModel {
        fail: bool,
    }

    impl BaseModel for FailingModel {
        fn kind(&self) -> &'static str {
            "failing"
        }

        fn train(&mut self, _data: &Dataset) -> Result<()> {
            if self.fail {
                return Err(CoverageEnsembleError::training("base model failed"));
            }
            Ok(())
        }

        fn predict_distribution(
            &self,
            _instance: &Instance,
        ) -> Result<ndarray::Array1<f64>> {
            Ok(ndarray::Array1::zeros(2))
        }
    }

    impl ModelFactory for FailingFactory {
        fn create(&self) -> Box<dyn BaseModel> {
            let n = self.counter.fetch_add(1, Ordering::SeqCst);
            Box::new(FailingModel {
                fail: n >= self.fail_from,
            })
        }

        fn kind(&self) -> &'static str {
            "failing"
        }
    }

    fn imbalanced_dataset(counts: &[usize]) -> Dataset {
        let num_classes = counts.len();
        let mut instances = Vec::new();
        for (class, &count) in counts.iter().enumerate() {
            for i in 0..count {
                instances.push(Instance::new(
                    array![class as f32, i as f32],
                    class as f32,
                ));
            }
        }
        Dataset::new(instances, TargetType::Categorical { num_classes }).unwrap()
    }

    #[test]
    fn test_fixed_round_count_training() {
        let factory = RecordingFactory {
            created: AtomicUsize::new(0),
        };
        let config = TrainingConfig::builder().fixed_round_count(6).build().unwrap();
        let trainer = EnsembleTrainer::new(&factory, config);

        let data = imbalanced_dataset(&[12, 4]);
        let ensemble = trainer.train(&data).unwrap();

        assert_eq!(ensemble.num_models(), 6);
        assert_eq!(ensemble.num_rounds(), 6);
        assert_eq!(factory.created.load(Ordering::SeqCst), 6);
        assert_eq!(ensemble.model_kind(), "recording");
    }

    #[test]
    fn test_coverage_round_count_training() {
        let factory = RecordingFactory {
            created: AtomicUsize::new(0),
        };
        // minority_share = 4/8 = 0.5, coverage 90% -> 4 rounds
        let config = TrainingConfig::builder().coverage_percent(90.0).build().unwrap();
        let trainer = EnsembleTrainer::new(&factory, config);

        let data = imbalanced_dataset(&[8, 4]);
        let ensemble = trainer.train(&data).unwrap();
        assert_eq!(ensemble.num_models(), 4);
    }

    #[test]
    fn test_numeric_target_rejected() {
        let factory = RecordingFactory {
            created: AtomicUsize::new(0),
        };
        let trainer = EnsembleTrainer::new(&factory, TrainingConfig::default());
        let data = Dataset::new(
            vec![Instance::new(array![1.0], 0.3)],
            TargetType::Numeric,
        )
        .unwrap();
        assert!(matches!(
            trainer.train(&data),
            Err(CoverageEnsembleError::UnsupportedTargetType { .. })
        ));
        assert_eq!(factory.created.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_insufficient_class_size_fails_before_training() {
        let factory = RecordingFactory {
            created: AtomicUsize::new(0),
        };
        let trainer = EnsembleTrainer::new(&factory, TrainingConfig::default());
        // Class 1 is absent, so it can never supply the minority size.
        let data = imbalanced_dataset(&[6, 0, 2]);
        assert!(matches!(
            trainer.train(&data),
            Err(CoverageEnsembleError::InsufficientClassSize { .. })
        ));
        assert_eq!(factory.created.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_base_model_failure_propagates() {
        let factory = FailingFactory {
            fail_from: 2,
            counter: AtomicUsize::new(0),
        };
        let config = TrainingConfig::builder().fixed_round_count(4).build().unwrap();
        let trainer = EnsembleTrainer::new(&factory, config);
        let data = imbalanced_dataset(&[10, 3]);
        assert!(matches!(
            trainer.train(&data),
            Err(CoverageEnsembleError::Training { .. })
        ));
    }

    #[test]
    fn test_model_seeds_depend_only_on_base_seed() {
        let data = imbalanced_dataset(&[10, 3]);

        let seeds_for = |parallelism: usize| -> Vec<Option<u64>> {
            let factory = RecordingFactory {
                created: AtomicUsize::new(0),
            };
            let config = TrainingConfig::builder()
                .fixed_round_count(5)
                .base_seed(99)
                .parallelism(parallelism)
                .build()
                .unwrap();
            let trainer = EnsembleTrainer::new(&factory, config);
            let ensemble = trainer.train(&data).unwrap();
            ensemble
                .iter()
                .map(|model| {
                    model
                        .describe()
                        .strip_prefix("RecordingModel { seed: Some(")
                        .and_then(|rest| rest.split(')').next())
                        .and_then(|n| n.parse().ok())
                })
                .collect()
        };

        let serial = seeds_for(1);
        let parallel = seeds_for(3);
        assert_eq!(serial, parallel);
        assert!(serial.iter().all(Option::is_some));
    }

    #[test]
    fn test_parallel_and_serial_subsets_match() {
        let data = imbalanced_dataset(&[20, 5]);

        let subsets_for = |parallelism: usize| -> Vec<Vec<f32>> {
            let strategy_subsets = Mutex::new(vec![Vec::new(); 4]);
            struct CapturingStrategy<'a> {
                inner: BalancedSubsetSampler<'a>,
                captured: &'a Mutex<Vec<Vec<f32>>>,
            }
            impl ResamplingStrategy for CapturingStrategy<'_> {
                fn sample(&self, round: usize) -> Result<Dataset> {
                    let subset = self.inner.sample(round)?;
                    let features: Vec<f32> = subset
                        .iter()
                        .flat_map(|i| i.features().iter().copied().collect::<Vec<_>>())
                        .collect();
                    self.captured.lock().unwrap()[round] = features;
                    Ok(subset)
                }
            }

            let partition = ClassPartition::from_dataset(&data).unwrap();
            let sampler = BalancedSubsetSampler::new(&partition, data.target(), 7);
            let strategy = CapturingStrategy {
                inner: sampler,
                captured: &strategy_subsets,
            };
            let factory = RecordingFactory {
                created: AtomicUsize::new(0),
            };
            let config = TrainingConfig::builder()
                .fixed_round_count(4)
                .base_seed(7)
                .parallelism(parallelism)
                .build()
                .unwrap();
            let trainer = EnsembleTrainer::new(&factory, config);
            trainer.train_rounds(&strategy, 4).unwrap();
            drop(strategy);
            strategy_subsets.into_inner().unwrap()
        };

        assert_eq!(subsets_for(1), subsets_for(3));
    }
}
