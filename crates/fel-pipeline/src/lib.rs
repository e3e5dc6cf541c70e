//! Numeric transformation pipeline for parsed XPM datasets.
//!
//! Everything in this crate is a pure function of an immutable
//! [`xpm_parser::XpmDataset`]: symbol grids become numeric or color
//! matrices, numeric matrices become smoothed/resampled surfaces or
//! weighted point clouds, and several datasets combine into one density
//! histogram. Rendering is someone else's job; this crate only hands over
//! plain data.

pub mod combine;
pub mod error;
pub mod grid;
pub mod scatter;
pub mod smooth;
pub mod surface;
pub mod view;

pub use combine::{combine_datasets, CombinedHistogram, DEFAULT_BINS};
pub use error::{PipelineError, Result};
pub use grid::{ColorGrid, NumericGrid};
pub use scatter::{ScatterCloud, DEFAULT_WEIGHT};
pub use smooth::{gaussian_smooth, DEFAULT_SIGMA};
pub use surface::{
    build_surface, resample_bilinear, Surface, OVERSAMPLE_NONE, OVERSAMPLE_SURFACE_2D,
    OVERSAMPLE_SURFACE_3D,
};
pub use view::{GridLayer, PlotData};
