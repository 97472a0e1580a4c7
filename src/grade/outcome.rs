#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{
    compare::{ComparisonOutcome, compare_elements},
    relevance::compare_grids,
    report::ReportSection,
    score::{SectionScore, ToleranceBonus, aggregate, round2},
};
use crate::features::{DocumentFeatures, Grid};

/// A fully graded submission: its sections, totals, and final score.
#[derive(Debug, Clone)]
pub struct GradedSubmission {
    /// Scored sections in report order.
    pub sections:    Vec<ReportSection>,
    /// Total elements counted toward the denominators.
    pub evaluated:   usize,
    /// Elements the candidate matched.
    pub correct:     usize,
    /// Final score in `[0, 100]`, rounded to two decimals.
    pub final_score: f64,
    /// Extra report note, e.g. the empty-grid warning.
    pub note:        Option<String>,
}

/// Turns one section comparison into its report form.
fn section(label: &str, outcome: ComparisonOutcome, ratio: f64) -> ReportSection {
    ReportSection {
        label: label.to_string(),
        element: outcome.label,
        ratio,
        differences: outcome.differences,
    }
}

/// Grades a grid submission: relevance-filtered cell comparison against the
/// reference, scored over the cells where the reference differs from the
/// baseline.
pub fn grade_grid(reference: &Grid, baseline: &Grid, candidate: &Grid) -> GradedSubmission {
    let outcome = compare_grids(reference, baseline, candidate);
    let ratio = outcome.ratio();
    let note = (outcome.evaluated == 0).then(|| {
        "No evaluated cells: the reference does not differ from the baseline in the compared range."
            .to_string()
    });

    GradedSubmission {
        sections:    vec![ReportSection {
            label:       "Cells".to_string(),
            element:     "Cell".to_string(),
            ratio,
            differences: outcome.differences,
        }],
        evaluated:   outcome.evaluated,
        correct:     outcome.correct,
        final_score: round2(ratio),
        note,
    }
}

/// Grades an office-document submission across its four sections, applying
/// the empty-paragraph tolerance bonus to the paragraph ratio before
/// aggregation.
pub fn grade_document(
    reference: &DocumentFeatures,
    candidate: &DocumentFeatures,
    bonus: &ToleranceBonus,
) -> GradedSubmission {
    let paragraphs = compare_elements(&reference.paragraphs, &candidate.paragraphs, "Paragraph");
    let paragraph_ratio = bonus.apply(
        paragraphs.match_ratio,
        reference.empty_paragraph_count(),
        candidate.empty_paragraph_count(),
    );

    let images = compare_elements(&reference.images, &candidate.images, "Image");
    let tables = compare_elements(&reference.tables, &candidate.tables, "Table");
    let margins = compare_elements(
        std::slice::from_ref(&reference.margins),
        std::slice::from_ref(&candidate.margins),
        "Margins",
    );

    let evaluated = paragraphs.total + images.total + tables.total + margins.total;
    let correct = paragraphs.matched + images.matched + tables.matched + margins.matched;

    let image_ratio = images.match_ratio;
    let table_ratio = tables.match_ratio;
    let margin_ratio = margins.match_ratio;

    let final_score = aggregate(&[
        SectionScore::new("Paragraphs", paragraph_ratio),
        SectionScore::new("Images", image_ratio),
        SectionScore::new("Tables", table_ratio),
        SectionScore::new("Margins", margin_ratio),
    ]);

    GradedSubmission {
        sections: vec![
            section("Paragraphs", paragraphs, paragraph_ratio),
            section("Images", images, image_ratio),
            section("Tables", tables, table_ratio),
            section("Margins", margins, margin_ratio),
        ],
        evaluated,
        correct,
        final_score,
        note: None,
    }
}
