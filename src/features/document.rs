#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Paragraph alignment as reported by the office bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left-aligned text.
    Left,
    /// Centered text.
    Center,
    /// Right-aligned text.
    Right,
    /// Justified text.
    Justified,
    /// Alignment absent or not recognized.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justified => "justified",
            Alignment::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// One paragraph of an office document, with its formatting summary.
///
/// Formatting absence is a first-class value: the flags are computed over the
/// paragraph's runs, and the font lists are empty when no run declares one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphInfo {
    /// Paragraph text with surrounding whitespace stripped.
    pub text:      String,
    /// Length of the stripped text.
    pub length:    usize,
    /// Style name, e.g. `Normal` or `Heading 1`.
    pub style:     String,
    /// True if any run in the paragraph is bold.
    pub bold:      bool,
    /// True if any run in the paragraph is italic.
    pub italic:    bool,
    /// True if any run in the paragraph is underlined.
    pub underline: bool,
    /// Font names declared by the paragraph's runs.
    pub fonts:     Vec<String>,
    /// Font sizes in points declared by the paragraph's runs.
    pub sizes:     Vec<f64>,
    /// Paragraph alignment.
    pub alignment: Alignment,
}

impl ParagraphInfo {
    /// True when the paragraph carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl Display for ParagraphInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' [len {}, style {}, bold {}, italic {}, underline {}, fonts [{}], sizes [{}], {}]",
            self.text,
            self.length,
            self.style,
            self.bold,
            self.italic,
            self.underline,
            self.fonts.iter().join(", "),
            self.sizes.iter().join(", "),
            self.alignment,
        )
    }
}

/// One embedded image: its format and pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image format, e.g. `PNG` or `JPEG`.
    pub format: String,
    /// Width in pixels.
    pub width:  u32,
    /// Height in pixels.
    pub height: u32,
}

impl Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}x{}", self.format, self.width, self.height)
    }
}

/// One table's shape: row and column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Number of rows in the table.
    pub rows:    usize,
    /// Number of columns in the table.
    pub columns: usize,
}

impl Display for TableInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rows x {} columns", self.rows, self.columns)
    }
}

/// Page margin attributes keyed by margin name.
///
/// Backed by an ordered map so that reports render margins deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Margins(pub BTreeMap<String, String>);

impl Display for Margins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(none)");
        }
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .join(", ")
        )
    }
}

/// The full comparable feature model of one office document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFeatures {
    /// Paragraph records in document order.
    pub paragraphs: Vec<ParagraphInfo>,
    /// Embedded image records in document order.
    pub images:     Vec<ImageInfo>,
    /// Table records in document order.
    pub tables:     Vec<TableInfo>,
    /// Page margin attributes.
    pub margins:    Margins,
}

impl DocumentFeatures {
    /// Number of paragraphs carrying no visible text.
    pub fn empty_paragraph_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.is_empty()).count()
    }
}
