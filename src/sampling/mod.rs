//! Subset sampling for the coverage-based resampling ensemble.
//!
//! Contains the coverage-driven round-count derivation and the balanced
//! per-round subset sampler.

pub mod balanced;
pub mod coverage;

pub use balanced::BalancedSubsetSampler;
pub use coverage::rounds_for_coverage;
