//! Weighted scatter representation of a numeric grid.

use tracing::debug;
use xpm_parser::{AlignedAxes, XpmDataset};

use crate::error::Result;
use crate::grid::NumericGrid;

/// Default scatter expansion weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Per-cell point triples plus the weighted expansion.
///
/// `x`, `y` and `value` hold one entry per grid cell in row-major order.
/// `scatter_x`/`scatter_y` repeat each cell `round((max - value) * weight)`
/// times, so low-valued cells (deep free-energy wells) dominate the cloud
/// and point density is inversely proportional to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterCloud {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub value: Vec<f64>,
    pub scatter_x: Vec<f64>,
    pub scatter_y: Vec<f64>,
}

impl ScatterCloud {
    /// Build the scatter cloud of a Continuous dataset.
    pub fn from_dataset(dataset: &XpmDataset, weight: f64) -> Result<Self> {
        let grid = NumericGrid::from_dataset(dataset)?;
        Ok(Self::from_grid(&grid, &dataset.aligned_axes(), weight))
    }

    /// Build the scatter cloud from an existing grid and aligned axes.
    pub fn from_grid(grid: &NumericGrid, axes: &AlignedAxes, weight: f64) -> Self {
        let cells = grid.len();
        let mut cloud = Self {
            x: Vec::with_capacity(cells),
            y: Vec::with_capacity(cells),
            value: Vec::with_capacity(cells),
            scatter_x: Vec::new(),
            scatter_y: Vec::new(),
        };

        for row in 0..grid.height {
            for col in 0..grid.width {
                cloud.x.push(axes.x[col]);
                cloud.y.push(axes.y[row]);
                cloud.value.push(grid.data[row * grid.width + col]);
            }
        }

        let max = grid.max_value();
        for i in 0..cloud.value.len() {
            let count = ((max - cloud.value[i]) * weight).round();
            let count = if count > 0.0 { count as usize } else { 0 };
            for _ in 0..count {
                cloud.scatter_x.push(cloud.x[i]);
                cloud.scatter_y.push(cloud.y[i]);
            }
        }

        debug!(
            cells = cells,
            points = cloud.scatter_x.len(),
            "expanded scatter cloud"
        );
        cloud
    }

    /// Number of grid cells represented.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of points in the weighted expansion.
    pub fn point_count(&self) -> usize {
        self.scatter_x.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures;
    use xpm_parser::parse_str;

    #[test]
    fn test_scatter_cloud_from_2x2() {
        let parsed = parse_str(&fixtures::continuous_2x2()).unwrap();
        let cloud = ScatterCloud::from_dataset(&parsed.dataset, DEFAULT_WEIGHT).unwrap();

        // row-major cells against aligned axes (y reversed: row 0 at y=1)
        assert_eq!(cloud.x, vec![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(cloud.y, vec![1.0, 1.0, 0.0, 0.0]);
        assert_eq!(cloud.value, vec![0.0, 1.0, 1.0, 0.0]);

        // max value 1.0: the two zero-valued cells contribute one point each,
        // the two max-valued cells contribute none
        assert_eq!(cloud.point_count(), 2);
        assert_eq!(cloud.scatter_x, vec![0.0, 1.0]);
        assert_eq!(cloud.scatter_y, vec![1.0, 0.0]);
    }

    #[test]
    fn test_count_monotonic_in_value() {
        let grid = NumericGrid::new(vec![0.0, 2.0, 5.0, 9.0], 2, 2);
        let axes = AlignedAxes {
            x: vec![0.0, 1.0],
            y: vec![1.0, 0.0],
        };
        let cloud = ScatterCloud::from_grid(&grid, &axes, 1.0);

        let count_of = |value: f64| {
            let idx = cloud.value.iter().position(|v| *v == value).unwrap();
            let (x, y) = (cloud.x[idx], cloud.y[idx]);
            cloud
                .scatter_x
                .iter()
                .zip(&cloud.scatter_y)
                .filter(|(sx, sy)| **sx == x && **sy == y)
                .count()
        };

        assert_eq!(count_of(0.0), 9);
        assert_eq!(count_of(2.0), 7);
        assert_eq!(count_of(5.0), 4);
        assert_eq!(count_of(9.0), 0);
    }

    #[test]
    fn test_weight_scales_counts() {
        let grid = NumericGrid::new(vec![0.0, 1.0], 2, 1);
        let axes = AlignedAxes {
            x: vec![0.0, 1.0],
            y: vec![0.0],
        };
        assert_eq!(ScatterCloud::from_grid(&grid, &axes, 1.0).point_count(), 1);
        assert_eq!(ScatterCloud::from_grid(&grid, &axes, 3.0).point_count(), 3);
        // fractional counts round to nearest
        assert_eq!(ScatterCloud::from_grid(&grid, &axes, 0.4).point_count(), 0);
        assert_eq!(ScatterCloud::from_grid(&grid, &axes, 0.6).point_count(), 1);
    }

    #[test]
    fn test_requires_continuous() {
        let parsed = parse_str(&fixtures::discrete_3x1()).unwrap();
        assert!(ScatterCloud::from_dataset(&parsed.dataset, DEFAULT_WEIGHT).is_err());
    }
}
