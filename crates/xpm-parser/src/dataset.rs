//! The parsed, validated XPM dataset.

use serde::{Deserialize, Serialize};
use xpm_common::Rgb;

use crate::axis::AlignedAxes;

/// Declared dataset type from the `/* type: */` comment.
///
/// Only `Continuous` datasets permit numeric interpretation of symbols; any
/// other declared type string is treated as `Discrete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatasetKind {
    Continuous,
    #[default]
    Discrete,
}

impl DatasetKind {
    /// Map the declared type string onto a kind.
    pub fn from_type_str(s: &str) -> Self {
        if s == "Continuous" {
            Self::Continuous
        } else {
            Self::Discrete
        }
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous)
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Continuous => write!(f, "Continuous"),
            Self::Discrete => write!(f, "Discrete"),
        }
    }
}

/// One entry of the symbol-to-color legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// Pixel symbol, exactly `symbol_width` characters (space-padded if the
    /// file carried a shorter one).
    pub symbol: String,
    /// Verbatim `#RRGGBB` string from the file, kept for script export.
    pub hex: String,
    /// Parsed color.
    pub rgb: Rgb,
    /// Comment column; holds the numeric value for Continuous datasets.
    pub note: String,
}

/// A parsed XPM matrix.
///
/// Immutable after a successful parse. All structural invariants (color
/// count, row count and length, axis lengths, symbol coverage) have already
/// been checked, so consumers can index into `rows` without re-validating.
#[derive(Debug, Clone)]
pub struct XpmDataset {
    pub title: String,
    pub legend: String,
    pub kind: DatasetKind,
    pub x_label: String,
    pub y_label: String,

    /// Grid width in pixels.
    pub width: usize,
    /// Grid height in pixels.
    pub height: usize,
    /// Declared number of color-table entries; equals `color_table.len()`.
    pub color_count: usize,
    /// Character length of every pixel symbol.
    pub symbol_width: usize,

    /// Symbol legend in file order.
    pub color_table: Vec<ColorEntry>,

    /// Raw x coordinates, `width` or `width + 1` values.
    pub x_axis: Vec<f64>,
    /// Raw y coordinates, `height` or `height + 1` values, top row first.
    pub y_axis: Vec<f64>,

    /// Pixel rows in file order (row 0 is the top of the image), each
    /// `width * symbol_width` characters.
    pub rows: Vec<String>,
}

impl XpmDataset {
    pub fn is_continuous(&self) -> bool {
        self.kind.is_continuous()
    }

    /// Axes normalized to the grid dimensions, y reversed to bottom-to-top.
    ///
    /// All consumers (grid building, scatter generation, export) go through
    /// this one method so axis handling cannot drift between them.
    pub fn aligned_axes(&self) -> AlignedAxes {
        AlignedAxes::of(self)
    }

    /// The symbol at a pixel cell.
    ///
    /// Returns `None` if the cell is out of range. Symbols are ASCII, so the
    /// byte slice is also a character slice.
    pub fn symbol_at(&self, row: usize, col: usize) -> Option<&str> {
        let line = self.rows.get(row)?;
        let start = col.checked_mul(self.symbol_width)?;
        line.get(start..start + self.symbol_width)
    }

    /// Position of a symbol in the color table.
    pub fn symbol_index(&self, symbol: &str) -> Option<usize> {
        self.color_table.iter().position(|e| e.symbol == symbol)
    }
}
