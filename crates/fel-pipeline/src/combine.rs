//! Combining several datasets into one density histogram.

use rayon::prelude::*;
use tracing::info;
use xpm_parser::XpmDataset;

use crate::error::{PipelineError, Result};
use crate::grid::NumericGrid;
use crate::scatter::{ScatterCloud, DEFAULT_WEIGHT};
use crate::smooth::gaussian_smooth;

/// Default number of histogram bins per axis.
pub const DEFAULT_BINS: usize = 800;

/// Smoothed 2D bin counts over the combined scatter range.
///
/// `counts` is row-major with row index following the y bins (row 0 at the
/// lowest y edge) and column index following the x bins. Title, legend and
/// labels come from the last input dataset; inputs are not checked for
/// consistent metadata.
#[derive(Debug, Clone)]
pub struct CombinedHistogram {
    pub counts: NumericGrid,
    /// `bins + 1` x bin edges, ascending.
    pub x_edges: Vec<f64>,
    /// `bins + 1` y bin edges, ascending.
    pub y_edges: Vec<f64>,
    pub title: String,
    pub legend: String,
    pub x_label: String,
    pub y_label: String,
}

/// Merge the weighted scatter clouds of several Continuous datasets into a
/// smoothed density histogram.
///
/// Every dataset's expansion is computed independently (in parallel), the
/// point clouds are concatenated, binned into `bins x bins` counts over the
/// combined coordinate range, and the count matrix is Gaussian-smoothed.
pub fn combine_datasets(
    datasets: &[XpmDataset],
    bins: usize,
    sigma: f64,
) -> Result<CombinedHistogram> {
    let last = datasets.last().ok_or(PipelineError::NoDatasets)?;
    if let Some(bad) = datasets.iter().find(|ds| !ds.is_continuous()) {
        return Err(PipelineError::unsupported("combine", bad.kind));
    }

    let clouds: Vec<ScatterCloud> = datasets
        .par_iter()
        .map(|ds| ScatterCloud::from_dataset(ds, DEFAULT_WEIGHT))
        .collect::<Result<_>>()?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for cloud in &clouds {
        xs.extend_from_slice(&cloud.scatter_x);
        ys.extend_from_slice(&cloud.scatter_y);
    }

    let (counts, x_edges, y_edges) = histogram2d(&xs, &ys, bins);

    info!(
        datasets = datasets.len(),
        points = xs.len(),
        bins = bins,
        "combined datasets into histogram"
    );
    Ok(CombinedHistogram {
        counts: gaussian_smooth(&counts, sigma),
        x_edges,
        y_edges,
        title: last.title.clone(),
        legend: last.legend.clone(),
        x_label: last.x_label.clone(),
        y_label: last.y_label.clone(),
    })
}

/// Bin `(x, y)` points into a `bins x bins` count matrix spanning the data
/// range, returning the matrix and both edge arrays.
///
/// Points on the far edge land in the last bin. A degenerate range (all
/// coordinates equal, or no points at all) falls back to a unit-width span
/// so the edges stay strictly ascending.
fn histogram2d(xs: &[f64], ys: &[f64], bins: usize) -> (NumericGrid, Vec<f64>, Vec<f64>) {
    let bins = bins.max(1);
    let x_range = value_range(xs);
    let y_range = value_range(ys);
    let x_edges = edges(x_range, bins);
    let y_edges = edges(y_range, bins);

    let mut counts = vec![0.0; bins * bins];
    for (x, y) in xs.iter().zip(ys) {
        let col = bin_index(*x, x_range, bins);
        let row = bin_index(*y, y_range, bins);
        counts[row * bins + col] += 1.0;
    }

    (NumericGrid::new(counts, bins, bins), x_edges, y_edges)
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn edges((min, max): (f64, f64), bins: usize) -> Vec<f64> {
    let step = (max - min) / bins as f64;
    (0..=bins).map(|i| min + step * i as f64).collect()
}

fn bin_index(value: f64, (min, max): (f64, f64), bins: usize) -> usize {
    let t = (value - min) / (max - min);
    ((t * bins as f64) as usize).min(bins - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{assert_approx_eq, fixtures};
    use xpm_parser::parse_str;

    fn dataset(text: &str) -> XpmDataset {
        parse_str(text).unwrap().dataset
    }

    #[test]
    fn test_combine_conserves_point_mass() {
        let a = dataset(&fixtures::continuous_2x2());
        let b = dataset(&fixtures::continuous_4x3());

        let expected: usize = [&a, &b]
            .iter()
            .map(|ds| {
                ScatterCloud::from_dataset(ds, DEFAULT_WEIGHT)
                    .unwrap()
                    .point_count()
            })
            .sum();

        let histogram = combine_datasets(&[a, b], 16, 0.3).unwrap();
        // smoothing happens after binning and redistributes mass without
        // changing the total beyond floating error
        assert_approx_eq!(histogram.counts.total(), expected as f64, 1e-6);
    }

    #[test]
    fn test_metadata_from_last_dataset() {
        let a = dataset(&fixtures::continuous_2x2());
        let mut b = dataset(&fixtures::continuous_4x3());
        b.title = "second landscape".to_string();
        b.x_label = "RMSD (nm)".to_string();

        let histogram = combine_datasets(&[a, b], 8, 0.3).unwrap();
        assert_eq!(histogram.title, "second landscape");
        assert_eq!(histogram.x_label, "RMSD (nm)");
    }

    #[test]
    fn test_edges_span_combined_range() {
        let a = dataset(&fixtures::continuous_2x2());
        let histogram = combine_datasets(&[a], 10, 0.0).unwrap();

        assert_eq!(histogram.x_edges.len(), 11);
        assert_eq!(histogram.y_edges.len(), 11);
        assert!(histogram.x_edges.windows(2).all(|p| p[0] < p[1]));
        // scatter points of the 2x2 fixture sit at x 0 and 1, y 0 and 1
        assert_approx_eq!(histogram.x_edges[0], 0.0, 1e-12);
        assert_approx_eq!(*histogram.x_edges.last().unwrap(), 1.0, 1e-12);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            combine_datasets(&[], DEFAULT_BINS, 0.3).unwrap_err(),
            PipelineError::NoDatasets
        ));
    }

    #[test]
    fn test_discrete_input_rejected() {
        let a = dataset(&fixtures::continuous_2x2());
        let b = dataset(&fixtures::discrete_3x1());
        assert!(matches!(
            combine_datasets(&[a, b], DEFAULT_BINS, 0.3).unwrap_err(),
            PipelineError::UnsupportedType { .. }
        ));
    }

    #[test]
    fn test_histogram_far_edge_lands_in_last_bin() {
        let (counts, _, _) = histogram2d(&[0.0, 1.0], &[0.0, 1.0], 4);
        assert_eq!(counts.get(0, 0), Some(1.0));
        assert_eq!(counts.get(3, 3), Some(1.0));
        assert_approx_eq!(counts.total(), 2.0, 1e-12);
    }
}
