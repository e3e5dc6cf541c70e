//! Numeric and color matrices expanded from pixel rows.

use std::collections::HashMap;

use tracing::debug;
use xpm_common::Rgb;
use xpm_parser::XpmDataset;

use crate::error::{PipelineError, Result};

/// A `height x width` matrix of f64 values in row-major order.
///
/// Row 0 corresponds to the top pixel row of the source image.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericGrid {
    /// Values in row-major order.
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

impl NumericGrid {
    /// Wrap existing row-major data.
    pub fn new(data: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Build the numeric grid of a Continuous dataset by mapping every pixel
    /// symbol to its color-table note parsed as a float.
    pub fn from_dataset(dataset: &XpmDataset) -> Result<Self> {
        if !dataset.is_continuous() {
            return Err(PipelineError::unsupported("numeric grid", dataset.kind));
        }

        // Notes are parsed once per table entry; an unparseable note only
        // fails the build if one of its pixels is actually present.
        let index: HashMap<&str, usize> = dataset
            .color_table
            .iter()
            .enumerate()
            .map(|(i, e)| (e.symbol.as_str(), i))
            .collect();
        let notes: Vec<Option<f64>> = dataset
            .color_table
            .iter()
            .map(|e| e.note.trim().parse().ok())
            .collect();

        let mut data = Vec::with_capacity(dataset.width * dataset.height);
        for row in 0..dataset.height {
            for col in 0..dataset.width {
                let symbol = dataset.symbol_at(row, col).unwrap_or("");
                let entry = *index.get(symbol).ok_or_else(|| PipelineError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    row,
                    col,
                })?;
                let value = notes[entry].ok_or_else(|| PipelineError::ValueFormat {
                    symbol: symbol.to_string(),
                    note: dataset.color_table[entry].note.clone(),
                })?;
                data.push(value);
            }
        }

        debug!(
            width = dataset.width,
            height = dataset.height,
            "built numeric grid"
        );
        Ok(Self::new(data, dataset.width, dataset.height))
    }

    /// Value at a cell, or `None` out of range.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.width)
    }

    /// Largest value in the grid.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value in the grid.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A `height x width` matrix of RGB triples.
///
/// Derivable for every dataset kind, Continuous or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    /// Colors in row-major order.
    pub data: Vec<Rgb>,
    pub width: usize,
    pub height: usize,
}

impl ColorGrid {
    /// Build the color grid by mapping every pixel symbol to its table color.
    pub fn from_dataset(dataset: &XpmDataset) -> Result<Self> {
        let index: HashMap<&str, Rgb> = dataset
            .color_table
            .iter()
            .map(|e| (e.symbol.as_str(), e.rgb))
            .collect();

        let mut data = Vec::with_capacity(dataset.width * dataset.height);
        for row in 0..dataset.height {
            for col in 0..dataset.width {
                let symbol = dataset.symbol_at(row, col).unwrap_or("");
                let rgb = *index.get(symbol).ok_or_else(|| PipelineError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    row,
                    col,
                })?;
                data.push(rgb);
            }
        }

        Ok(Self {
            data,
            width: dataset.width,
            height: dataset.height,
        })
    }

    /// Color at a cell, or `None` out of range.
    pub fn get(&self, col: usize, row: usize) -> Option<Rgb> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }
}
