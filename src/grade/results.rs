#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;
use tabled::Tabled;

/// Marker written in place of a score for a failed submission.
pub const FAILED_MARKER: &str = "FAILED";

/// One row of the consolidated evaluation table.
#[derive(Tabled, Clone, Debug, Serialize)]
pub struct SubmissionRecord {
    /// Student first name, capitalized.
    #[tabled(rename = "Name")]
    pub name:    String,
    /// Student surname, capitalized; empty when the file name did not carry
    /// one.
    #[tabled(rename = "Surname")]
    pub surname: String,
    /// Final score rendered as text, or the FAILED marker.
    #[tabled(rename = "Score (%)")]
    pub score:   String,
}
