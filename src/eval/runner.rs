#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::future::join_all;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

use super::{
    paths::EvalPaths,
    submission::{DocumentKind, StudentName, Submission},
};
use crate::{
    extract::{
        BridgeClient, BridgeExtractor, BridgeModel, CsvExtractor, ExtractError, Extractor,
        FeatureSet,
    },
    grade::{
        FAILED_MARKER, GradedSubmission, SubmissionRecord, ToleranceBonus, Verdict, console_diff,
        grade_document, grade_grid, report, round2,
    },
    util,
};

/// An error fatal to a whole evaluation run.
#[derive(thiserror::Error, Debug)]
pub enum EvalError {
    /// No assignment identifier was given and none could be resolved from
    /// the submissions root.
    #[error("no assignment identifier could be resolved: no argument given and no submission folders exist")]
    TargetNotFound,
    /// A required folder or artifact is absent.
    #[error("required resource `{path}` not available")]
    MissingResource {
        /// The missing folder or artifact.
        path: PathBuf,
    },
    /// Unknown error.
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// Resolved per-run resources, validated before any submission is touched.
#[derive(Debug)]
struct Resources {
    /// Folder holding the candidate submissions.
    folder:   PathBuf,
    /// Reference solution artifact.
    solution: PathBuf,
    /// Ungraded baseline artifact, grid mode only.
    baseline: Option<PathBuf>,
    /// Document format shared by the solution and the submissions.
    kind:     DocumentKind,
}

/// Outcome of one submission's evaluation pipeline.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    /// Student identity parsed from the file name.
    pub student:   StudentName,
    /// Submission file name.
    pub file_name: String,
    /// Final score, or `None` when the submission failed to evaluate.
    pub score:     Option<f64>,
    /// Failure or warning note attached to this submission.
    pub note:      Option<String>,
}

impl SubmissionOutcome {
    /// Renders this outcome as a consolidated table row.
    pub fn record(&self) -> SubmissionRecord {
        SubmissionRecord {
            name:    self.student.first.clone(),
            surname: self.student.surname.clone(),
            score:   match self.score {
                Some(score) => format!("{score}"),
                None => FAILED_MARKER.to_string(),
            },
        }
    }
}

/// Consolidated result of one evaluation run.
#[derive(Debug)]
pub struct EvaluationReport {
    /// The graded assignment identifier.
    pub assignment:  String,
    /// Per-submission outcomes, sorted by surname then first name.
    pub outcomes:    Vec<SubmissionOutcome>,
    /// Path of the consolidated CSV report.
    pub report_path: PathBuf,
}

/// Orchestrates one grading run: target resolution, resource validation,
/// per-submission evaluation, aggregation, and persistence.
#[derive(TypedBuilder)]
pub struct Evaluator {
    /// Directory layout for the run.
    #[builder(default)]
    paths:      EvalPaths,
    /// Explicit assignment identifier, if one was supplied.
    #[builder(default)]
    assignment: Option<String>,
    /// Tolerance bonus rule applied to paragraph sections.
    #[builder(default)]
    bonus:      ToleranceBonus,
    /// Office-automation bridge client, required for docx and ods runs.
    #[builder(default)]
    bridge:     Option<BridgeClient>,
}

impl Evaluator {
    /// Runs the full evaluation pipeline for the resolved assignment.
    pub async fn run(&self) -> Result<EvaluationReport, EvalError> {
        let assignment = self.resolve_target()?;
        let resources = self.validate_resources(&assignment)?;

        let reference = self.extract_required(&resources.solution, resources.kind).await?;
        let baseline = match &resources.baseline {
            Some(path) => Some(self.extract_required(path, resources.kind).await?),
            None => None,
        };

        std::fs::create_dir_all(self.paths.evaluations_dir())
            .context("Could not create the evaluations directory")?;

        let submissions = self.discover_submissions(&resources)?;
        let evaluations = submissions.into_iter().map(|submission| {
            self.evaluate_submission(submission, &assignment, &reference, baseline.as_ref())
        });
        let mut outcomes = join_all(evaluations).await;
        outcomes.sort_by_key(|o| {
            (
                o.student.surname.to_lowercase(),
                o.student.first.to_lowercase(),
            )
        });

        let report_path = self.paths.consolidated_report(&assignment);
        self.write_consolidated(&report_path, &outcomes)?;
        info!(
            "Consolidated evaluation report generated at: {}",
            report_path.display()
        );
        self.print_overview(&assignment, &outcomes);

        Ok(EvaluationReport {
            assignment,
            outcomes,
            report_path,
        })
    }

    /// Resolves the assignment to grade: the explicit identifier if one was
    /// supplied, otherwise the most recently modified submissions folder.
    fn resolve_target(&self) -> Result<String, EvalError> {
        if let Some(assignment) = &self.assignment {
            return Ok(assignment.clone());
        }

        util::latest_subdir(self.paths.assignments_dir())
            .ok()
            .flatten()
            .and_then(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
            .ok_or(EvalError::TargetNotFound)
    }

    /// Checks that the submission folder, the reference solution, and the
    /// grid-mode baseline all exist before any submission is touched.
    fn validate_resources(&self, assignment: &str) -> Result<Resources, EvalError> {
        let folder = self.paths.assignment_folder(assignment);
        if !folder.is_dir() {
            return Err(EvalError::MissingResource { path: folder });
        }

        let (solution, kind) = [DocumentKind::Csv, DocumentKind::Docx, DocumentKind::Ods]
            .into_iter()
            .map(|kind| (self.paths.solution_file(assignment, kind), kind))
            .find(|(path, _)| path.is_file())
            .ok_or_else(|| EvalError::MissingResource {
                path: self
                    .paths
                    .solution_file(assignment, DocumentKind::Csv)
                    .with_extension("{csv,docx,ods}"),
            })?;

        let baseline = if kind.is_grid() {
            let path = self.paths.baseline_file(assignment, kind);
            if !path.is_file() {
                return Err(EvalError::MissingResource { path });
            }
            Some(path)
        } else {
            None
        };

        Ok(Resources {
            folder,
            solution,
            baseline,
            kind,
        })
    }

    /// Extracts a run-level artifact; any failure here is fatal for the run.
    async fn extract_required(
        &self,
        path: &Path,
        kind: DocumentKind,
    ) -> Result<FeatureSet, EvalError> {
        self.extract_for_kind(path, kind)
            .await
            .map_err(|e| EvalError::Unknown(anyhow::Error::new(e).context(format!(
                "Failed to extract reference artifact: {}",
                path.display()
            ))))
    }

    /// Extracts one document with the extractor matching its format.
    async fn extract_for_kind(
        &self,
        path: &Path,
        kind: DocumentKind,
    ) -> Result<FeatureSet, ExtractError> {
        match kind {
            DocumentKind::Csv => CsvExtractor.extract(path).await,
            DocumentKind::Docx => {
                let client = self.bridge_client(path)?;
                BridgeExtractor::new(client, BridgeModel::Document)
                    .extract(path)
                    .await
            }
            DocumentKind::Ods => {
                let client = self.bridge_client(path)?;
                BridgeExtractor::new(client, BridgeModel::Grid)
                    .extract(path)
                    .await
            }
        }
    }

    /// Returns the configured bridge client, or the distinct
    /// extraction-unavailable failure when none is configured.
    fn bridge_client(&self, path: &Path) -> Result<BridgeClient, ExtractError> {
        self.bridge
            .clone()
            .ok_or_else(|| ExtractError::Unavailable {
                path:   path.to_path_buf(),
                detail: "office bridge endpoint not configured; set DOCMARK_BRIDGE_URL".to_string(),
            })
    }

    /// Lists the submission files matching the run's document format.
    fn discover_submissions(&self, resources: &Resources) -> Result<Vec<Submission>, EvalError> {
        let files = util::find_files(resources.kind.extension(), 0, &resources.folder)
            .context("Could not list submissions")?;

        Ok(files.into_iter().filter_map(Submission::from_path).collect())
    }

    /// Runs one submission through extract → compare → score → report.
    ///
    /// Never fails the batch: every error is folded into the returned
    /// outcome so the remaining submissions still get graded.
    async fn evaluate_submission(
        &self,
        submission: Submission,
        assignment: &str,
        reference: &FeatureSet,
        baseline: Option<&FeatureSet>,
    ) -> SubmissionOutcome {
        let features = match self.extract_for_kind(&submission.path, submission.kind).await {
            Ok(features) => features,
            Err(e) => {
                warn!("Evaluation failed for {}: {e}", submission.file_name);
                return SubmissionOutcome {
                    student:   submission.student,
                    file_name: submission.file_name,
                    score:     None,
                    note:      Some(e.to_string()),
                };
            }
        };

        let graded = match (reference, &features, baseline) {
            (FeatureSet::Grid(reference), FeatureSet::Grid(candidate), Some(FeatureSet::Grid(baseline))) => {
                grade_grid(reference, baseline, candidate)
            }
            (FeatureSet::Document(reference), FeatureSet::Document(candidate), None) => {
                grade_document(reference, candidate, &self.bonus)
            }
            _ => {
                warn!(
                    "Evaluation failed for {}: incompatible feature models",
                    submission.file_name
                );
                return SubmissionOutcome {
                    student:   submission.student,
                    file_name: submission.file_name,
                    score:     None,
                    note:      Some("reference and candidate feature models are incompatible".to_string()),
                };
            }
        };

        self.show_first_mismatch(&graded);
        info!(
            "Assessment {}: {}%",
            submission.file_name, graded.final_score
        );

        let note = self.write_student_report(assignment, &submission, &graded);

        SubmissionOutcome {
            student: submission.student,
            file_name: submission.file_name,
            score: Some(graded.final_score),
            note,
        }
    }

    /// Prints a colored console diff for the first mismatched element, if
    /// any.
    fn show_first_mismatch(&self, graded: &GradedSubmission) {
        let first = graded
            .sections
            .iter()
            .flat_map(|section| section.differences.iter())
            .find(|difference| difference.verdict == Verdict::Incorrect);

        if let Some(difference) = first {
            eprintln!("{}", console_diff(&difference.expected, &difference.actual));
        }
    }

    /// Writes the per-student Markdown report; a write failure loses the
    /// report but not the computed score.
    fn write_student_report(
        &self,
        assignment: &str,
        submission: &Submission,
        graded: &GradedSubmission,
    ) -> Option<String> {
        let title = submission.student.to_string();
        let rendered = report::build(
            &title,
            &graded.sections,
            graded.note.as_deref(),
            graded.evaluated,
            graded.correct,
            graded.final_score,
        );

        let path = self.paths.student_report(assignment, &submission.student);
        match std::fs::write(&path, rendered) {
            Ok(()) => {
                info!(
                    "Detailed report generated for {}: {}",
                    submission.file_name,
                    path.display()
                );
                None
            }
            Err(e) => {
                warn!(
                    "Could not write report for {}: {e}",
                    submission.file_name
                );
                Some(format!("report write failed: {e}"))
            }
        }
    }

    /// Writes the consolidated CSV table, one row per submission.
    fn write_consolidated(
        &self,
        path: &Path,
        outcomes: &[SubmissionOutcome],
    ) -> Result<(), EvalError> {
        let mut lines = vec!["Name,Surname,Score (%)".to_string()];
        for outcome in outcomes {
            let record = outcome.record();
            lines.push(format!(
                "{},{},{}",
                csv_field(&record.name),
                csv_field(&record.surname),
                csv_field(&record.score),
            ));
        }

        std::fs::write(path, lines.join("\n") + "\n")
            .with_context(|| format!("Could not write consolidated report: {}", path.display()))?;
        Ok(())
    }

    /// Prints the consolidated overview table to stderr.
    fn print_overview(&self, assignment: &str, outcomes: &[SubmissionOutcome]) {
        let records: Vec<SubmissionRecord> = outcomes.iter().map(SubmissionOutcome::record).collect();

        let scored: Vec<f64> = outcomes.iter().filter_map(|o| o.score).collect();
        let footer = if scored.is_empty() {
            "Average: n/a".to_string()
        } else {
            let average = scored.iter().sum::<f64>() / scored.len() as f64;
            format!("Average: {}%", round2(average))
        };

        eprintln!(
            "{}",
            Table::new(&records)
                .with(Panel::header(format!("Evaluation Overview: {assignment}")))
                .with(Panel::footer(footer))
                .with(Modify::new(Rows::new(1..)).with(Width::wrap(24).keep_words(true)))
                .with(
                    Modify::new(Rows::first())
                        .with(Alignment::center())
                        .with(Alignment::center_vertical()),
                )
                .with(
                    Modify::new(Rows::last())
                        .with(Alignment::center())
                        .with(Alignment::center_vertical()),
                )
                .with(Style::modern())
        );
    }
}

/// Escapes one CSV field, quoting only when the content requires it.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
