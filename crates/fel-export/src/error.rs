//! Error types for exporters.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using ExportError.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while writing export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination already exists; exporters never overwrite.
    #[error("output file {} already exists", .path.display())]
    IoConflict { path: PathBuf },

    /// The dataset could not provide the data being exported.
    #[error(transparent)]
    Pipeline(#[from] fel_pipeline::PipelineError),

    /// Failed to write the artifact.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create an IoConflict error.
    pub fn conflict(path: impl AsRef<Path>) -> Self {
        Self::IoConflict {
            path: path.as_ref().to_path_buf(),
        }
    }
}
