//! Three-column scatter record export.

use std::path::Path;

use fel_pipeline::{ScatterCloud, DEFAULT_WEIGHT};
use tracing::info;
use xpm_parser::XpmDataset;

use crate::error::{ExportError, ExportResult};

/// Render the per-cell triples as `x-axis,y-axis,value` records.
pub fn scatter_records(cloud: &ScatterCloud) -> String {
    let mut out = String::from("x-axis,y-axis,value\n");
    for i in 0..cloud.len() {
        out.push_str(&format!(
            "{:.6},{:.6},{:.6}\n",
            cloud.x[i], cloud.y[i], cloud.value[i]
        ));
    }
    out
}

/// Write the scatter records of a Continuous dataset to `path`.
///
/// Fails with [`ExportError::IoConflict`] if `path` already exists and
/// propagates the pipeline error for non-Continuous datasets.
pub fn write_scatter_records(dataset: &XpmDataset, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(ExportError::conflict(path));
    }

    let cloud = ScatterCloud::from_dataset(dataset, DEFAULT_WEIGHT)?;
    std::fs::write(path, scatter_records(&cloud))?;

    info!(path = %path.display(), cells = cloud.len(), "wrote scatter records");
    Ok(())
}
