#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use super::{ExtractError, Extractor, FeatureSet, parsers};
use crate::features::{Cell, Grid};

/// Extracts a cell grid from a local CSV file.
///
/// Every field is normalized through [`Cell::parse`]; blank lines are
/// skipped, and short rows are padded with empty cells by the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExtractor;

impl CsvExtractor {
    /// Parses CSV text into a grid.
    fn parse_grid(path: &Path, raw: &str) -> Result<Grid, ExtractError> {
        let mut rows = Vec::new();
        for (line_no, line) in raw.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let fields = parsers::csv::record(line).map_err(|e| ExtractError::Malformed {
                path:   path.to_path_buf(),
                detail: format!("line {}: {e}", line_no + 1),
            })?;
            rows.push(fields.iter().map(|field| Cell::parse(field)).collect());
        }
        Ok(Grid::from_rows(rows))
    }
}

impl Extractor for CsvExtractor {
    async fn extract(&self, path: &Path) -> Result<FeatureSet, ExtractError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ExtractError::Unreadable {
            path:   path.to_path_buf(),
            source: e,
        })?;

        Ok(FeatureSet::Grid(Self::parse_grid(path, &raw)?))
    }
}
