#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;
use similar::{Algorithm, ChangeTag, utils::diff_unicode_words};

/// Verdict for one compared element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The candidate element equals the reference element.
    Correct,
    /// The candidate element differs from the reference element.
    Incorrect,
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct"),
            Verdict::Incorrect => write!(f, "Incorrect"),
        }
    }
}

/// One recorded comparison entry: where, what was expected, what was found.
#[derive(Debug, Clone, Serialize)]
pub struct Difference {
    /// 1-based position of the element within its section.
    pub position: String,
    /// Rendered reference value.
    pub expected: String,
    /// Rendered candidate value.
    pub actual:   String,
    /// Whether the pair matched.
    pub verdict:  Verdict,
}

/// Result of comparing one section of two documents.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    /// Section element name used in difference entries, e.g. `Paragraph`.
    pub label:       String,
    /// Recorded comparison entries, in input order.
    pub differences: Vec<Difference>,
    /// Number of positions that matched.
    pub matched:     usize,
    /// Number of positions counted toward the denominator.
    pub total:       usize,
    /// Match percentage in `[0, 100]`.
    pub match_ratio: f64,
}

/// Compares two feature sequences positionally and classifies each pair.
///
/// Both sequences empty is a perfect match; exactly one empty is a zero
/// match. Otherwise pairs are compared in lockstep up to the shorter length,
/// and the ratio is taken over the reference length, so a candidate is
/// neither penalized nor rewarded for a longer tail.
pub fn compare_elements<T>(reference: &[T], candidate: &[T], label: &str) -> ComparisonOutcome
where
    T: PartialEq + Display,
{
    if reference.is_empty() && candidate.is_empty() {
        return ComparisonOutcome {
            label:       label.to_string(),
            differences: Vec::new(),
            matched:     0,
            total:       0,
            match_ratio: 100.0,
        };
    }

    if reference.is_empty() || candidate.is_empty() {
        return ComparisonOutcome {
            label:       label.to_string(),
            differences: Vec::new(),
            matched:     0,
            total:       reference.len(),
            match_ratio: 0.0,
        };
    }

    let mut matched = 0;
    let mut differences = Vec::new();
    for (index, (expected, actual)) in reference.iter().zip(candidate).enumerate() {
        if expected == actual {
            matched += 1;
        } else {
            differences.push(Difference {
                position: (index + 1).to_string(),
                expected: expected.to_string(),
                actual:   actual.to_string(),
                verdict:  Verdict::Incorrect,
            });
        }
    }

    ComparisonOutcome {
        label: label.to_string(),
        differences,
        matched,
        total: reference.len(),
        match_ratio: 100.0 * matched as f64 / reference.len() as f64,
    }
}

/// Renders a word-level console diff of one mismatched pair, expected
/// deletions in red and candidate insertions in green.
pub fn console_diff(expected: &str, actual: &str) -> String {
    let diff = diff_unicode_words(Algorithm::Patience, expected, actual);

    let mut colored_expected = String::new();
    let mut colored_actual = String::new();
    for (change, value) in diff {
        match change {
            ChangeTag::Equal => {
                colored_expected.push_str(value);
                colored_actual.push_str(value);
            }
            ChangeTag::Insert => {
                colored_actual.push_str(&format!("{}", value.green()));
            }
            ChangeTag::Delete => {
                colored_expected.push_str(&format!("{}", value.red()));
            }
        }
    }

    format!("Expected:\n{colored_expected}\nCandidate:\n{colored_actual}")
}
