//! Plot-ready data bundles for the rendering collaborator.

use xpm_parser::{AlignedAxes, DatasetKind, XpmDataset};

use crate::error::Result;
use crate::grid::{ColorGrid, NumericGrid};

/// The grid payload of a plot: numeric values or literal pixel colors.
#[derive(Debug, Clone)]
pub enum GridLayer {
    Values(NumericGrid),
    Colors(ColorGrid),
}

/// Everything a renderer needs to draw one dataset.
///
/// Bundles the metadata, the aligned axes and the expanded grid so the
/// renderer never re-derives alignment on its own.
#[derive(Debug, Clone)]
pub struct PlotData {
    pub title: String,
    pub legend: String,
    pub kind: DatasetKind,
    pub x_label: String,
    pub y_label: String,
    pub axes: AlignedAxes,
    pub layer: GridLayer,
}

impl PlotData {
    /// Numeric view of a Continuous dataset.
    pub fn values(dataset: &XpmDataset) -> Result<Self> {
        let grid = NumericGrid::from_dataset(dataset)?;
        Ok(Self::assemble(dataset, GridLayer::Values(grid)))
    }

    /// Color view, available for every dataset kind.
    pub fn colors(dataset: &XpmDataset) -> Result<Self> {
        let grid = ColorGrid::from_dataset(dataset)?;
        Ok(Self::assemble(dataset, GridLayer::Colors(grid)))
    }

    fn assemble(dataset: &XpmDataset, layer: GridLayer) -> Self {
        Self {
            title: dataset.title.clone(),
            legend: dataset.legend.clone(),
            kind: dataset.kind,
            x_label: dataset.x_label.clone(),
            y_label: dataset.y_label.clone(),
            axes: dataset.aligned_axes(),
            layer,
        }
    }
}
