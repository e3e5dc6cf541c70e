//! Error types for the grid pipeline.

use thiserror::Error;
use xpm_parser::DatasetKind;

/// Errors that can occur while deriving grids, surfaces or scatter data.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A pixel symbol has no color-table entry.
    ///
    /// Unreachable for a fully parsed dataset; hand-built inputs can still
    /// trigger it.
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        symbol: String,
        row: usize,
        col: usize,
    },

    /// A color-table note is not numeric on a dataset claiming numeric content.
    #[error("color note {note:?} for symbol {symbol:?} is not numeric")]
    ValueFormat { symbol: String, note: String },

    /// Axis coordinates unsuitable for interpolation.
    #[error("interpolation error: {0}")]
    Interpolation(String),

    /// A numeric operation was requested on a non-Continuous dataset.
    #[error("{operation} requires a Continuous dataset, got {kind}")]
    UnsupportedType {
        operation: &'static str,
        kind: DatasetKind,
    },

    /// The combiner was handed an empty dataset list.
    #[error("no datasets to combine")]
    NoDatasets,
}

impl PipelineError {
    /// Create an Interpolation error.
    pub fn interpolation(msg: impl Into<String>) -> Self {
        Self::Interpolation(msg.into())
    }

    /// Create an UnsupportedType error.
    pub fn unsupported(operation: &'static str, kind: DatasetKind) -> Self {
        Self::UnsupportedType { operation, kind }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
