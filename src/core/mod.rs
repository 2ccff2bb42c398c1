//! Core infrastructure for the coverage-based resampling ensemble.
//!
//! This module contains the error taxonomy, fundamental type aliases, and
//! the trait seams between the meta-algorithm and its collaborators.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CoverageEnsembleError, Result};
pub use traits::{BaseModel, ModelFactory, ResamplingStrategy};
pub use types::{ClassIndex, Label, RoundIndex, Score, TargetType};
