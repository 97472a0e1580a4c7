#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use super::submission::{DocumentKind, StudentName};
use crate::constants::{ASSIGNMENTS_DIR, BASELINE_STEM, EVALUATIONS_DIR, SOLUTION_STEM, SOLUTIONS_DIR};

/// Represents the standard directory layout for evaluation runs.
#[derive(Debug, Clone)]
pub struct EvalPaths {
    /// Root of the per-assignment submission folders.
    assignments_dir: PathBuf,
    /// Root of the per-assignment reference artifacts.
    solutions_dir:   PathBuf,
    /// Directory where reports are written.
    evaluations_dir: PathBuf,
}

impl Default for EvalPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalPaths {
    /// Creates the default layout relative to the working directory.
    pub fn new() -> Self {
        Self {
            assignments_dir: PathBuf::from(ASSIGNMENTS_DIR),
            solutions_dir:   PathBuf::from(SOLUTIONS_DIR),
            evaluations_dir: PathBuf::from(EVALUATIONS_DIR),
        }
    }

    /// Creates the standard layout rooted at `root`.
    pub fn rooted(root: &Path) -> Self {
        Self {
            assignments_dir: root.join(ASSIGNMENTS_DIR),
            solutions_dir:   root.join(SOLUTIONS_DIR),
            evaluations_dir: root.join(EVALUATIONS_DIR),
        }
    }

    /// Root of the per-assignment submission folders.
    pub fn assignments_dir(&self) -> &Path {
        self.assignments_dir.as_path()
    }

    /// Directory where reports are written.
    pub fn evaluations_dir(&self) -> &Path {
        self.evaluations_dir.as_path()
    }

    /// Submission folder for one assignment.
    pub fn assignment_folder(&self, assignment: &str) -> PathBuf {
        self.assignments_dir.join(assignment)
    }

    /// Reference solution artifact for one assignment and format.
    pub fn solution_file(&self, assignment: &str, kind: DocumentKind) -> PathBuf {
        self.solutions_dir
            .join(assignment)
            .join(format!("{SOLUTION_STEM}.{}", kind.extension()))
    }

    /// Ungraded baseline artifact for one assignment and format.
    pub fn baseline_file(&self, assignment: &str, kind: DocumentKind) -> PathBuf {
        self.solutions_dir
            .join(assignment)
            .join(format!("{BASELINE_STEM}.{}", kind.extension()))
    }

    /// Consolidated CSV report path for one assignment.
    pub fn consolidated_report(&self, assignment: &str) -> PathBuf {
        self.evaluations_dir.join(format!("{assignment}-Report.csv"))
    }

    /// Per-student Markdown report path for one assignment.
    pub fn student_report(&self, assignment: &str, student: &StudentName) -> PathBuf {
        self.evaluations_dir.join(format!(
            "{assignment}-{}-{}-Report.md",
            student.first, student.surname
        ))
    }
}
