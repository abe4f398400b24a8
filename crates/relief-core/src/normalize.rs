//! Min/max rescaling of a raw noise field to [0, 1].
use crate::error::{ReliefError, Result};
use crate::field::Field;

/// `(v - min) / (max - min)` for every cell.
///
/// A constant field maps to all zeros. Any NaN or infinite cell is rejected
/// with `InvalidInput` since min/max would be meaningless.
pub fn normalize(field: &Field<f64>) -> Result<Field<f64>> {
    if let Some(idx) = field.data.iter().position(|v| !v.is_finite()) {
        return Err(ReliefError::InvalidInput(format!(
            "non-finite value {} at row {}, col {}",
            field.data[idx],
            idx / field.width.max(1),
            idx % field.width.max(1)
        )));
    }
    if field.is_empty() {
        return Ok(field.clone());
    }

    let min_v = field.min_value();
    let range = field.max_value() - min_v;
    if range > 0.0 {
        Ok(field.map(|&v| (v - min_v) / range))
    } else {
        Ok(field.map(|_| 0.0))
    }
}
