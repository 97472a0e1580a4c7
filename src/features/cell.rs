#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single scalar value at one grid coordinate.
///
/// Extraction normalizes every raw token into exactly one variant, so the
/// comparator always compares like-with-like: a `Number` never equals a
/// `Text` that happens to render the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Free text, including the empty string for missing values.
    Text(String),
    /// A finite numeric value.
    Number(f64),
    /// A formula source string, stored with its leading `=`.
    Formula(String),
}

impl Cell {
    /// Normalizes one raw token into a typed cell value.
    ///
    /// Surrounding whitespace is not significant. Missing values map to empty
    /// text, a leading `=` marks a formula, and any token parsing as a finite
    /// number becomes a `Number`.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if token.is_empty() {
            return Cell::Text(String::new());
        }
        if token.starts_with('=') {
            return Cell::Formula(token.to_string());
        }
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number(value),
            _ => Cell::Text(token.to_string()),
        }
    }

    /// Returns the empty-text cell used for missing coordinates.
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// True for the empty-text cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Text(text) if text.is_empty())
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Formula(source) => write!(f, "{source}"),
        }
    }
}

/// The empty cell returned for coordinates outside a grid.
static EMPTY_CELL: Cell = Cell::Text(String::new());

/// A rectangular, row-major grid of cells extracted from one document.
///
/// Construction pads ragged rows with empty cells so every row has the same
/// width, mirroring the missing-value normalization of the extractors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major cell storage; all rows share the same width.
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from extracted rows, padding short rows with empty
    /// cells.
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::empty());
        }
        Self { rows }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the grid.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the cell at `(row, col)`, or the empty cell when the
    /// coordinate lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}
