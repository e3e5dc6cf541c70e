//! Common types shared across the fel-viz workspace.

pub mod color;
pub mod style;

pub use color::{ColorError, Rgb};
pub use style::{PlotStyle, StyleError, TickDirection};
