#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Positional sequence comparison.
pub mod compare;
/// Section assembly into graded submissions.
pub mod outcome;
/// Baseline relevance filtering for grid submissions.
pub mod relevance;
/// Markdown difference report rendering.
pub mod report;
/// Consolidated result rows.
pub mod results;
/// Ratio aggregation and tolerance bonuses.
pub mod score;

pub use compare::{ComparisonOutcome, Difference, Verdict, compare_elements, console_diff};
pub use outcome::{GradedSubmission, grade_document, grade_grid};
pub use relevance::{GridOutcome, compare_grids};
pub use report::ReportSection;
pub use results::{FAILED_MARKER, SubmissionRecord};
pub use score::{SectionScore, ToleranceBonus, aggregate, round2};
