#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Directory holding one submissions folder per assignment.
pub const ASSIGNMENTS_DIR: &str = "assignments";

/// Directory holding the reference artifacts for each assignment.
pub const SOLUTIONS_DIR: &str = "solutions";

/// Directory where consolidated and per-student reports are written.
pub const EVALUATIONS_DIR: &str = "evaluations";

/// File stem of the instructor's reference solution artifact.
pub const SOLUTION_STEM: &str = "solution";

/// File stem of the ungraded baseline artifact (grid mode only).
pub const BASELINE_STEM: &str = "assignment";

/// Environment variable naming the office-automation bridge endpoint.
pub const BRIDGE_URL_VAR: &str = "DOCMARK_BRIDGE_URL";

/// Environment variable overriding the bridge request timeout, in seconds.
pub const BRIDGE_TIMEOUT_VAR: &str = "DOCMARK_BRIDGE_TIMEOUT_SECS";

/// Default bridge request timeout in seconds.
pub const BRIDGE_TIMEOUT_SECS: u64 = 30;

/// Default allowed difference in empty-paragraph counts before the
/// structural discrepancy is penalized.
pub const EMPTY_LINE_TOLERANCE: usize = 1;

/// Default bonus points added to a paragraph section within tolerance.
pub const TOLERANCE_BONUS: f64 = 10.0;
