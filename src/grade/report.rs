#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{compare::Difference, score::round2};

/// One section as rendered into the per-student report.
#[derive(Debug, Clone)]
pub struct ReportSection {
    /// Section heading, e.g. `Paragraphs`.
    pub label:       String,
    /// Element name used in difference lines, e.g. `Paragraph`.
    pub element:     String,
    /// Final section ratio, after any bonus.
    pub ratio:       f64,
    /// Recorded comparison entries for the section.
    pub differences: Vec<Difference>,
}

/// Renders a finalized ratio without trailing noise.
fn fmt_ratio(ratio: f64) -> String {
    format!("{}", round2(ratio))
}

/// Builds the Markdown difference report for one graded submission.
///
/// Output is deterministic for identical inputs: sections and differences
/// render in input order, which supports golden-file testing.
pub fn build(
    title: &str,
    sections: &[ReportSection],
    note: Option<&str>,
    evaluated: usize,
    correct: usize,
    final_score: f64,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# Comparison Report for {title}"));
    lines.push(String::new());

    for section in sections {
        lines.push(format!(
            "- {}: {}% match",
            section.label,
            fmt_ratio(section.ratio)
        ));
        for difference in &section.differences {
            lines.push(format!(
                "- {} {}: Expected '{}', Candidate '{}' → {}",
                section.element,
                difference.position,
                difference.expected,
                difference.actual,
                difference.verdict,
            ));
        }
    }

    if let Some(note) = note {
        lines.push(format!("- {note}"));
    }

    lines.push(String::new());
    lines.push(format!("**Total Evaluated**: {evaluated}"));
    lines.push(format!("**Correct**: {correct}"));
    lines.push(format!("**Final Score**: {}%", fmt_ratio(final_score)));

    lines.join("\n") + "\n"
}
