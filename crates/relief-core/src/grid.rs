//! Sample-coordinate grid.
//!
//! Coordinates are 1-indexed and unit-spaced: column `c` samples at
//! `x = c + 1`, row `r` at `y = r + 1`. Downstream consumers must not assume
//! any other origin.

use crate::error::{ReliefError, Result};
use crate::field::Field;

/// Coordinate grid built once per generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// x coordinate of every cell; varies along columns.
    pub x: Field<f64>,
    /// y coordinate of every cell; varies along rows.
    pub y: Field<f64>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let (x, y) = build_grid(width, height)?;
        Ok(Self { x, y })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.x.height
    }

    /// (rows, columns).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }
}

/// Build the `(X, Y)` coordinate arrays, each of shape (height, width).
pub fn build_grid(width: usize, height: usize) -> Result<(Field<f64>, Field<f64>)> {
    if width == 0 || height == 0 {
        return Err(ReliefError::InvalidParameter(format!(
            "grid dimensions must be positive, got {width}×{height}"
        )));
    }

    let mut xs = Vec::with_capacity(width * height);
    let mut ys = Vec::with_capacity(width * height);
    for r in 0..height {
        for c in 0..width {
            xs.push((c + 1) as f64);
            ys.push((r + 1) as f64);
        }
    }

    Ok((
        Field { data: xs, width, height },
        Field { data: ys, width, height },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_start_at_one() {
        let (x, y) = build_grid(4, 3).unwrap();
        assert_eq!(*x.get(0, 0), 1.0);
        assert_eq!(*y.get(0, 0), 1.0);
        assert_eq!(*x.get(2, 3), 4.0);
        assert_eq!(*y.get(2, 3), 3.0);
    }

    #[test]
    fn x_varies_along_columns_y_along_rows() {
        let (x, y) = build_grid(5, 2).unwrap();
        for r in 0..2 {
            for c in 0..5 {
                assert_eq!(*x.get(r, c), (c + 1) as f64);
                assert_eq!(*y.get(r, c), (r + 1) as f64);
            }
        }
    }

    #[test]
    fn shape_is_height_by_width() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.shape(), (3, 7));
        assert_eq!(grid.y.shape(), (3, 7));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(build_grid(0, 4), Err(ReliefError::InvalidParameter(_))));
        assert!(matches!(build_grid(4, 0), Err(ReliefError::InvalidParameter(_))));
    }
}
