//! Parser for the GROMACS XPM matrix format.
//!
//! GROMACS analysis tools write 2D scalar fields (free-energy landscapes,
//! contact maps, secondary-structure timelines) as XPM images: a fixed-width
//! pixel grid, a symbol-to-color legend whose comment column carries the
//! numeric value of each symbol, and axis coordinates embedded in comment
//! lines. This crate turns that text into a validated [`XpmDataset`] that the
//! downstream grid pipeline consumes.

pub mod axis;
pub mod dataset;
pub mod error;
pub mod parse;

pub use axis::AlignedAxes;
pub use dataset::{ColorEntry, DatasetKind, XpmDataset};
pub use error::{XpmError, XpmResult};
pub use parse::{parse_file, parse_str, ParseWarning, ParsedXpm};
