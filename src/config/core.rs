//! Training configuration for the coverage-based resampling ensemble.
//!
//! Provides the configuration structure, a builder that validates on
//! `build()`, and JSON load/save helpers.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of one ensemble training run.
///
/// Exactly one of the coverage-driven calculation and the fixed round
/// count determines the number of resampling rounds, selected by
/// `use_fixed_round_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Target coverage of the majority class, in percent.
    ///
    /// Must lie strictly between 0 and 100; 100 would imply an infinite
    /// round count. Ignored when `use_fixed_round_count` is set.
    pub coverage_percent: f64,
    /// Use `fixed_round_count` instead of the coverage-driven calculation.
    pub use_fixed_round_count: bool,
    /// Number of resampling rounds when `use_fixed_round_count` is set.
    pub fixed_round_count: usize,
    /// Base seed for subset sampling and per-model seed derivation.
    pub base_seed: u64,
    /// Number of worker threads for round training.
    pub parallelism: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            coverage_percent: 90.0,
            use_fixed_round_count: false,
            fixed_round_count: 10,
            base_seed: 1,
            parallelism: 1,
        }
    }
}

impl TrainingConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> TrainingConfigBuilder {
        TrainingConfigBuilder::new()
    }

    /// Default configuration sized to all available CPU cores.
    pub fn with_all_cores() -> Self {
        TrainingConfig {
            parallelism: num_cpus::get().max(1),
            ..Self::default()
        }
    }

    /// Validate all configuration parameters.
    pub fn validate(&self) -> Result<()> {
        crate::config::validation::validate(self)
    }

    /// Load a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TrainingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Builder for `TrainingConfig` with validation at build time.
#[derive(Debug, Clone)]
pub struct TrainingConfigBuilder {
    config: TrainingConfig,
}

impl TrainingConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        TrainingConfigBuilder {
            config: TrainingConfig::default(),
        }
    }

    /// Set the target majority-class coverage in percent.
    pub fn coverage_percent(mut self, coverage_percent: f64) -> Self {
        self.config.coverage_percent = coverage_percent;
        self
    }

    /// Use a fixed round count instead of the coverage calculation.
    pub fn fixed_round_count(mut self, rounds: usize) -> Self {
        self.config.use_fixed_round_count = true;
        self.config.fixed_round_count = rounds;
        self
    }

    /// Set the base random seed.
    pub fn base_seed(mut self, base_seed: u64) -> Self {
        self.config.base_seed = base_seed;
        self
    }

    /// Set the number of worker threads.
    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.config.parallelism = parallelism;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<TrainingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for TrainingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
