//! Derivation of the resampling round count from a target coverage.
//!
//! Each round draws a balanced subset whose non-minority classes are
//! undersampled to the minority size, so a given majority-class instance
//! is included in one round with probability approximately equal to the
//! minority/majority share. The round count is the smallest R for which
//! the probability of appearing in at least one round reaches the target.

use crate::config::validation::validate_coverage_percent;
use crate::core::error::{CoverageEnsembleError, Result};

/// Minimum number of rounds R such that
/// `1 - (1 - minority_share)^R >= coverage_percent / 100`.
///
/// `minority_share` is the ratio of minority to majority weighted counts,
/// taken from the global class histogram's min and max. Applying this
/// pairwise derivation to data with more than two classes is an inherited
/// simplification, not a guaranteed multi-class coverage bound.
///
/// Balanced data (`minority_share` = 1) is covered by a single round; the
/// result is clamped to at least 1.
pub fn rounds_for_coverage(minority_share: f64, coverage_percent: f64) -> Result<usize> {
    validate_coverage_percent(coverage_percent)?;

    if !(minority_share > 0.0 && minority_share <= 1.0) {
        return Err(CoverageEnsembleError::internal(format!(
            "minority share {} outside (0, 1]",
            minority_share
        )));
    }

    if minority_share >= 1.0 {
        return Ok(1);
    }

    let miss_target = 1.0 - coverage_percent / 100.0;
    let per_round_miss = 1.0 - minority_share;
    let rounds = (miss_target.ln() / per_round_miss.ln()).ceil();

    Ok((rounds as usize).max(1))
}
