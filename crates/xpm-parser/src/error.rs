//! Error types for XPM parsing.

use thiserror::Error;

/// Result type alias using XpmError.
pub type XpmResult<T> = Result<T, XpmError>;

/// Errors raised while parsing an XPM file.
///
/// Any of these aborts the parse; no partial dataset is ever returned.
#[derive(Debug, Error)]
pub enum XpmError {
    /// No `static char` declaration (and therefore no dimension line) found.
    #[error("no dimension line found (missing `static char` declaration)")]
    MissingDimensions,

    /// The line after the declaration did not hold four positive integers.
    #[error("invalid dimension line {line:?}: {message}")]
    InvalidDimensions { line: String, message: String },

    /// The color table does not match the declared color count.
    #[error("color table has {found} entries, header declares {declared}")]
    ColorCountMismatch { found: usize, declared: usize },

    /// A color-table symbol is longer than the declared symbol width.
    #[error("color symbol {symbol:?} is longer than {width} character(s)")]
    OversizedSymbol { symbol: String, width: usize },

    /// A color-table entry carries a malformed hex color.
    #[error("invalid color for symbol {symbol:?}: {source}")]
    InvalidColor {
        symbol: String,
        #[source]
        source: xpm_common::ColorError,
    },

    /// The number of pixel rows does not match the declared height.
    #[error("pixel data has {found} rows, header declares {declared}")]
    RowCountMismatch { found: usize, declared: usize },

    /// An axis array length matches neither the grid dimension nor dimension+1.
    #[error("{}-axis has {} values, expected {} or {}", .axis, .found, .expected, .expected + 1)]
    AxisLength {
        axis: char,
        found: usize,
        expected: usize,
    },

    /// A token in an axis comment line is not a number.
    #[error("invalid {}-axis value {:?}", .axis, .token)]
    InvalidAxisValue { axis: char, token: String },

    /// A metadata comment line carries no quoted text.
    #[error("malformed metadata line {0:?}")]
    InvalidMetadata(String),

    /// A pixel symbol is absent from the color table.
    #[error("unknown symbol {symbol:?} in pixel row {row}")]
    UnknownSymbol { symbol: String, row: usize },

    /// Failed to read the input file.
    #[error("failed to read xpm input: {0}")]
    Io(#[from] std::io::Error),
}
