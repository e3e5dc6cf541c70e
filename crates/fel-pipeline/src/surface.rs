//! Bilinear resampling of numeric grids onto finer regular axes.

use tracing::debug;
use xpm_parser::XpmDataset;

use crate::error::{PipelineError, Result};
use crate::grid::NumericGrid;
use crate::smooth::gaussian_smooth;

/// No oversampling; the grid is re-laid onto a regular axis only.
pub const OVERSAMPLE_NONE: usize = 1;
/// Oversampling factor used for 2D surface plots.
pub const OVERSAMPLE_SURFACE_2D: usize = 10;
/// Oversampling factor used for 3D surface plots.
pub const OVERSAMPLE_SURFACE_3D: usize = 12;

/// A resampled grid with its regular axis coordinates.
///
/// Both axes run in ascending order regardless of the source orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub values: NumericGrid,
}

/// Build a smoothed surface from a Continuous dataset.
///
/// The raw numeric grid is resampled first and only the fine grid is
/// smoothed; the opposite ordering produces an observably different surface.
pub fn build_surface(dataset: &XpmDataset, oversample: usize, sigma: f64) -> Result<Surface> {
    if !dataset.is_continuous() {
        return Err(PipelineError::unsupported("surface interpolation", dataset.kind));
    }

    let grid = NumericGrid::from_dataset(dataset)?;
    let axes = dataset.aligned_axes();
    let resampled = resample_bilinear(&grid, &axes.x, &axes.y, oversample)?;

    debug!(
        source_width = grid.width,
        source_height = grid.height,
        oversample = oversample,
        "resampled surface"
    );
    let smoothed = gaussian_smooth(&resampled.values, sigma);
    Ok(Surface {
        x: resampled.x,
        y: resampled.y,
        values: smoothed,
    })
}

/// Resample a grid onto regular axes spanning `[min, max]` per dimension
/// with `oversample * n` points.
///
/// `x_axis`/`y_axis` give the source coordinate of each column/row and must
/// be strictly monotonic (either direction); `y_axis` is typically
/// descending because row 0 sits at the top of the image.
pub fn resample_bilinear(
    grid: &NumericGrid,
    x_axis: &[f64],
    y_axis: &[f64],
    oversample: usize,
) -> Result<Surface> {
    if x_axis.len() != grid.width || y_axis.len() != grid.height {
        return Err(PipelineError::interpolation(format!(
            "axis lengths {}x{} do not match grid {}x{}",
            x_axis.len(),
            y_axis.len(),
            grid.width,
            grid.height
        )));
    }
    if grid.width < 2 || grid.height < 2 {
        return Err(PipelineError::interpolation(
            "interpolation needs at least two coordinates per axis",
        ));
    }
    if oversample == 0 {
        return Err(PipelineError::interpolation("oversample factor must be at least 1"));
    }

    // Work on ascending copies; flip the value rows/columns to match.
    let (xs, flip_x) = ascending(x_axis, 'x')?;
    let (ys, flip_y) = ascending(y_axis, 'y')?;
    let mut values = grid.data.clone();
    if flip_x {
        for row in values.chunks_mut(grid.width) {
            row.reverse();
        }
    }
    if flip_y {
        let (w, h) = (grid.width, grid.height);
        for row in 0..h / 2 {
            for col in 0..w {
                values.swap(row * w + col, (h - 1 - row) * w + col);
            }
        }
    }

    let new_x = linspace(xs[0], xs[xs.len() - 1], grid.width * oversample);
    let new_y = linspace(ys[0], ys[ys.len() - 1], grid.height * oversample);

    let mut out = Vec::with_capacity(new_x.len() * new_y.len());
    for ty in &new_y {
        let (y0, y1, fy) = bracket(&ys, *ty);
        for tx in &new_x {
            let (x0, x1, fx) = bracket(&xs, *tx);
            let v00 = values[y0 * grid.width + x0];
            let v10 = values[y0 * grid.width + x1];
            let v01 = values[y1 * grid.width + x0];
            let v11 = values[y1 * grid.width + x1];
            let top = v00 * (1.0 - fx) + v10 * fx;
            let bottom = v01 * (1.0 - fx) + v11 * fx;
            out.push(top * (1.0 - fy) + bottom * fy);
        }
    }

    Ok(Surface {
        values: NumericGrid::new(out, new_x.len(), new_y.len()),
        x: new_x,
        y: new_y,
    })
}

/// Return a strictly ascending copy of the coordinates, flagging whether the
/// input had to be reversed.
fn ascending(coords: &[f64], axis: char) -> Result<(Vec<f64>, bool)> {
    let increasing = coords.windows(2).all(|p| p[0] < p[1]);
    if increasing {
        return Ok((coords.to_vec(), false));
    }
    let decreasing = coords.windows(2).all(|p| p[0] > p[1]);
    if decreasing {
        let mut rev = coords.to_vec();
        rev.reverse();
        return Ok((rev, true));
    }
    Err(PipelineError::interpolation(format!(
        "{axis}-axis coordinates must be strictly monotonic and distinct"
    )))
}

/// Find the source interval containing `t` in ascending `coords`.
///
/// Returns the bracketing indices and the fractional position in between;
/// targets at or beyond the ends clamp to the outer interval.
fn bracket(coords: &[f64], t: f64) -> (usize, usize, f64) {
    let upper = coords.partition_point(|c| *c < t).clamp(1, coords.len() - 1);
    let lower = upper - 1;
    let span = coords[upper] - coords[lower];
    let frac = ((t - coords[lower]) / span).clamp(0.0, 1.0);
    (lower, upper, frac)
}

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
