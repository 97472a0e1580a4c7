#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Supported submission document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Comma-separated values, extracted locally.
    Csv,
    /// Office text document, extracted through the bridge.
    Docx,
    /// Office spreadsheet, extracted through the bridge as a grid.
    Ods,
}

impl DocumentKind {
    /// Maps a file extension to a document kind.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(DocumentKind::Csv),
            "docx" => Some(DocumentKind::Docx),
            "ods" => Some(DocumentKind::Ods),
            _ => None,
        }
    }

    /// The canonical file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Csv => "csv",
            DocumentKind::Docx => "docx",
            DocumentKind::Ods => "ods",
        }
    }

    /// True for kinds graded as cell grids against a baseline.
    pub fn is_grid(&self) -> bool {
        matches!(self, DocumentKind::Csv | DocumentKind::Ods)
    }
}

/// A student identity parsed from a submission file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentName {
    /// First name, capitalized.
    pub first:   String,
    /// Surname, capitalized; empty when the file name carried none.
    pub surname: String,
}

/// Lowercases a name part and capitalizes its first character.
fn capitalize(part: &str) -> String {
    let lower = part.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

impl StudentName {
    /// Parses a `firstname-surname` file stem into a student identity.
    ///
    /// Stems with more than two parts use the first two; a stem without a
    /// separator falls back to the whole stem as first name with an empty
    /// surname.
    pub fn from_stem(stem: &str) -> Self {
        let mut parts = stem.split('-').filter(|part| !part.is_empty());
        match (parts.next(), parts.next()) {
            (Some(first), Some(surname)) => Self {
                first:   capitalize(first),
                surname: capitalize(surname),
            },
            _ => Self {
                first:   capitalize(stem),
                surname: String::new(),
            },
        }
    }
}

impl Display for StudentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.surname.is_empty() {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{} {}", self.first, self.surname)
        }
    }
}

/// One discovered submission file awaiting evaluation.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Path of the submission document.
    pub path:      PathBuf,
    /// File name, for logging and failure notes.
    pub file_name: String,
    /// Student identity parsed from the file stem.
    pub student:   StudentName,
    /// Document format of the submission.
    pub kind:      DocumentKind,
}

impl Submission {
    /// Builds a submission from a discovered path; `None` when the
    /// extension maps to no supported format.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocumentKind::from_extension)?;

        let stem = path.file_stem()?.to_string_lossy().to_string();
        let file_name = path.file_name()?.to_string_lossy().to_string();

        Some(Self {
            path,
            file_name,
            student: StudentName::from_stem(&stem),
            kind,
        })
    }
}
