//! Text exporters for parsed XPM datasets.
//!
//! Two artifacts: a gnuplot script that reproduces the landscape with a
//! discrete palette and inline data block, and a three-column record file of
//! the raw per-cell scatter triples. Both refuse to overwrite an existing
//! destination.

pub mod error;
pub mod gnuplot;
pub mod records;

pub use error::{ExportError, ExportResult};
pub use gnuplot::{render_script, write_script};
pub use records::{scatter_records, write_scatter_records};
