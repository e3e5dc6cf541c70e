//! Separable Gaussian smoothing.

use crate::grid::NumericGrid;

/// Default Gaussian spread used across the pipeline.
pub const DEFAULT_SIGMA: f64 = 0.3;

/// Apply a separable Gaussian blur to a grid.
///
/// Borders are handled by reflection, and the kernel is truncated at
/// `4 * sigma` and normalized, so a constant grid passes through unchanged
/// and total mass is preserved up to floating error. A non-positive sigma
/// returns the grid as-is.
pub fn gaussian_smooth(grid: &NumericGrid, sigma: f64) -> NumericGrid {
    if sigma <= 0.0 || grid.is_empty() {
        return grid.clone();
    }

    let kernel = kernel(sigma);
    let horizontal = convolve_rows(&grid.data, grid.width, grid.height, &kernel);
    let transposed = transpose(&horizontal, grid.width, grid.height);
    let vertical = convolve_rows(&transposed, grid.height, grid.width, &kernel);
    let data = transpose(&vertical, grid.height, grid.width);

    NumericGrid::new(data, grid.width, grid.height)
}

/// Normalized 1D Gaussian kernel of radius `4 * sigma + 0.5`.
fn kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as usize;
    let mut weights = Vec::with_capacity(2 * radius + 1);
    for i in -(radius as isize)..=(radius as isize) {
        let x = i as f64;
        weights.push((-x * x / (2.0 * sigma * sigma)).exp());
    }
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Convolve every row of a row-major buffer with the kernel.
fn convolve_rows(data: &[f64], width: usize, height: usize, kernel: &[f64]) -> Vec<f64> {
    let radius = kernel.len() / 2;
    let mut out = vec![0.0; data.len()];
    for row in 0..height {
        let line = &data[row * width..(row + 1) * width];
        let out_line = &mut out[row * width..(row + 1) * width];
        for col in 0..width {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let offset = col as isize + k as isize - radius as isize;
                acc += weight * line[reflect(offset, width)];
            }
            out_line[col] = acc;
        }
    }
    out
}

/// Reflect an index into `0..len` (`a b c d` continues as `d c b a`).
fn reflect(mut i: isize, len: usize) -> usize {
    let n = len as isize;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - i - 1;
        } else {
            return i as usize;
        }
    }
}

fn transpose(data: &[f64], width: usize, height: usize) -> Vec<f64> {
    let mut out = vec![0.0; data.len()];
    for row in 0..height {
        for col in 0..width {
            out[col * height + row] = data[row * width + col];
        }
    }
    out
}
