#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use typed_builder::TypedBuilder;

use crate::constants::{EMPTY_LINE_TOLERANCE, TOLERANCE_BONUS};

/// Rounds a ratio to two decimal places.
///
/// Rounding happens once, when a ratio is finalized for reporting;
/// aggregation always works on unrounded values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bonus rule forgiving small discrepancies in empty-paragraph counts.
///
/// The bonus is binary within tolerance: a discrepancy of at most
/// `tolerance` empty units adds the flat `bonus`, anything larger adds
/// nothing. The boosted ratio is capped at 100.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ToleranceBonus {
    /// Maximum allowed difference in empty-unit counts.
    #[builder(default = EMPTY_LINE_TOLERANCE)]
    pub tolerance: usize,
    /// Flat bonus added when within tolerance.
    #[builder(default = TOLERANCE_BONUS)]
    pub bonus:     f64,
}

impl Default for ToleranceBonus {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ToleranceBonus {
    /// True when the empty-unit discrepancy is within tolerance.
    pub fn within(&self, reference_empty: usize, candidate_empty: usize) -> bool {
        reference_empty.abs_diff(candidate_empty) <= self.tolerance
    }

    /// Applies the bonus to a section ratio, capped at 100.
    pub fn apply(&self, ratio: f64, reference_empty: usize, candidate_empty: usize) -> f64 {
        if self.within(reference_empty, candidate_empty) {
            (ratio + self.bonus).min(100.0)
        } else {
            ratio
        }
    }
}

/// One section's contribution to the final score.
#[derive(Debug, Clone)]
pub struct SectionScore {
    /// Section label, for reporting.
    pub label:  String,
    /// Unrounded section match ratio in `[0, 100]`.
    pub ratio:  f64,
    /// Relative weight in the aggregate; 1.0 for every section yields the
    /// arithmetic mean.
    pub weight: f64,
}

impl SectionScore {
    /// Creates an evenly weighted section score.
    pub fn new(label: impl Into<String>, ratio: f64) -> Self {
        Self {
            label: label.into(),
            ratio,
            weight: 1.0,
        }
    }
}

/// Aggregates section ratios into one bounded final score.
///
/// The weighted mean of the unrounded ratios, capped at 100 and rounded to
/// two decimals at this single point.
pub fn aggregate(sections: &[SectionScore]) -> f64 {
    let total_weight: f64 = sections.iter().map(|s| s.weight).sum();
    if total_weight == 0.0 {
        return 0.0;
    }

    let weighted: f64 = sections.iter().map(|s| s.ratio * s.weight).sum();
    round2((weighted / total_weight).min(100.0))
}
