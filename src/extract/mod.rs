#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Office-automation bridge client and extractor.
pub mod bridge;
/// Local CSV grid extraction.
pub mod csv;
/// Text grammars used by the extractors.
pub mod parsers;

use std::path::{Path, PathBuf};

pub use bridge::{BridgeClient, BridgeExtractor, BridgeModel};
pub use csv::CsvExtractor;

use crate::features::{DocumentFeatures, Grid};

/// The comparable feature payload extracted from one document.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureSet {
    /// A cell grid (CSV and spreadsheet documents).
    Grid(Grid),
    /// An office-document feature model.
    Document(DocumentFeatures),
}

/// An error produced while extracting features from one document.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The document could not be read from disk.
    #[error("could not read `{path}`: {source}")]
    Unreadable {
        /// Path of the unreadable document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The document was read but its content could not be parsed.
    #[error("malformed content in `{path}`: {detail}")]
    Malformed {
        /// Path of the malformed document.
        path:   PathBuf,
        /// What failed to parse.
        detail: String,
    },
    /// The extraction backend could not be reached or did not answer in
    /// time.
    #[error("extraction unavailable for `{path}`: {detail}")]
    Unavailable {
        /// Path of the document that was being extracted.
        path:   PathBuf,
        /// Why the backend was unavailable.
        detail: String,
    },
    /// The document's extension maps to no known feature model.
    #[error("unsupported document format `{extension}`")]
    UnsupportedFormat {
        /// The unrecognized extension.
        extension: String,
    },
}

/// Turns one document into its comparable feature payload.
///
/// Implementations are per-format; the orchestrator only sees this seam.
#[allow(async_fn_in_trait)]
pub trait Extractor {
    /// Extracts the feature set of the document at `path`.
    async fn extract(&self, path: &Path) -> Result<FeatureSet, ExtractError>;
}
