#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::compare::{Difference, Verdict};
use crate::features::Grid;

/// Result of grading one grid submission against the reference and the
/// ungraded baseline.
#[derive(Debug, Clone)]
pub struct GridOutcome {
    /// One entry per evaluated coordinate, Correct and Incorrect alike.
    pub differences: Vec<Difference>,
    /// Number of coordinates counted toward the score.
    pub evaluated:   usize,
    /// Number of evaluated coordinates the candidate answered correctly.
    pub correct:     usize,
}

impl GridOutcome {
    /// Match percentage over the evaluated coordinates.
    ///
    /// Zero evaluated coordinates is scored 0, not 100: an assignment where
    /// the reference never differs from the baseline has nothing gradable,
    /// which is a configuration problem rather than a perfect submission.
    pub fn ratio(&self) -> f64 {
        if self.evaluated == 0 {
            0.0
        } else {
            100.0 * self.correct as f64 / self.evaluated as f64
        }
    }
}

/// Compares a candidate grid against the reference, restricted to the
/// coordinates where the reference differs from the baseline.
///
/// Cells the baseline already fills in would trivially match for every
/// candidate, so they are excluded from the denominator regardless of the
/// candidate's content. Comparison covers the overlap of the reference and
/// candidate dimensions; a baseline coordinate outside its grid reads as the
/// empty cell.
pub fn compare_grids(reference: &Grid, baseline: &Grid, candidate: &Grid) -> GridOutcome {
    let rows = reference.row_count().min(candidate.row_count());
    let cols = reference.col_count().min(candidate.col_count());

    let mut differences = Vec::new();
    let mut evaluated = 0;
    let mut correct = 0;

    for i in 0..rows {
        for j in 0..cols {
            let expected = reference.get(i, j);
            if expected == baseline.get(i, j) {
                continue;
            }

            evaluated += 1;
            let actual = candidate.get(i, j);
            let verdict = if actual == expected {
                correct += 1;
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };

            differences.push(Difference {
                position: format!("({}, {})", i + 1, j + 1),
                expected: expected.to_string(),
                actual: actual.to_string(),
                verdict,
            });
        }
    }

    GridOutcome {
        differences,
        evaluated,
        correct,
    }
}
