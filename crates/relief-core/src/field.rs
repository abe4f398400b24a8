use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, Result};

/// A 2D grid of values stored row-major: `data[row * width + col]`.
/// Shape is (height, width), matching the generator's rows × columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field<T> {
    pub data: Vec<T>,
    pub width: usize,
    pub height: usize,
}

/// Elevation in output units (depth-scaled, water level subtracted).
pub type ElevationField = Field<f64>;

/// `true` where the cell is at or above the water level.
pub type LandMask = Field<bool>;

impl<T: Clone> Field<T> {
    /// Create a new field filled with the given value.
    pub fn filled(width: usize, height: usize, fill: T) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }
}

impl<T> Field<T> {
    /// Wrap an existing row-major buffer. The buffer length must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != width * height {
            return Err(ReliefError::InvalidInput(format!(
                "buffer of {} values does not fit a {width}×{height} field",
                data.len()
            )));
        }
        Ok(Self { data, width, height })
    }

    /// (rows, columns).
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.width + col]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Elementwise transform into a new field of the same shape.
    pub fn map<U, F: Fn(&T) -> U>(&self, f: F) -> Field<U> {
        Field { data: self.data.iter().map(f).collect(), width: self.width, height: self.height }
    }

    /// Elementwise combination of two equal-shaped fields.
    /// There is no broadcasting: shapes must match exactly.
    pub fn zip_map<U, V, F: Fn(&T, &U) -> V>(&self, other: &Field<U>, f: F) -> Result<Field<V>> {
        self.ensure_same_shape(other)?;
        Ok(Field {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            width: self.width,
            height: self.height,
        })
    }

    pub fn ensure_same_shape<U>(&self, other: &Field<U>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(ReliefError::InvalidInput(format!(
                "shape mismatch: {:?} vs {:?}",
                self.shape(),
                other.shape()
            )));
        }
        Ok(())
    }
}

impl Field<f64> {
    pub fn min_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl Field<bool> {
    /// Fraction of `true` cells; 0 for an empty mask.
    pub fn true_fraction(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().filter(|&&b| b).count() as f64 / self.data.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(Field::from_vec(3, 2, vec![0.0f64; 5]).is_err());
        assert!(Field::from_vec(3, 2, vec![0.0f64; 6]).is_ok());
    }

    #[test]
    fn row_major_indexing() {
        let f = Field::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(*f.get(0, 2), 3);
        assert_eq!(*f.get(1, 0), 4);
        assert_eq!(f.shape(), (2, 3));
        assert_eq!(f.rows().count(), 2);
    }

    #[test]
    fn zip_map_requires_equal_shapes() {
        let a = Field::filled(4, 2, 1.0f64);
        let b = Field::filled(2, 4, 1.0f64);
        assert!(a.zip_map(&b, |x, y| x + y).is_err());

        let c = Field::filled(4, 2, 2.5f64);
        let sum = a.zip_map(&c, |x, y| x + y).unwrap();
        assert!(sum.data.iter().all(|&v| v == 3.5));
    }

    #[test]
    fn true_fraction_counts_cells() {
        let m = Field::from_vec(2, 2, vec![true, false, true, true]).unwrap();
        assert!((m.true_fraction() - 0.75).abs() < 1e-12);
    }
}
