#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Directory layout for evaluation runs.
pub mod paths;
/// Orchestration of one grading run.
pub mod runner;
/// Submission discovery and student-name parsing.
pub mod submission;

pub use paths::EvalPaths;
pub use runner::{EvalError, EvaluationReport, Evaluator, SubmissionOutcome};
pub use submission::{DocumentKind, StudentName, Submission};
