//! Final elevation and land mask.
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};
use crate::field::{ElevationField, Field, LandMask};

/// Everything one generation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightMaps {
    pub elevation: ElevationField,
    /// Present only when the profile has land/water semantics.
    pub land: Option<LandMask>,
}

impl HeightMaps {
    /// (rows, columns) shared by every field.
    pub fn shape(&self) -> (usize, usize) {
        self.elevation.shape()
    }
}

/// `elevation = base * depth [+ mountains] - water_level`, and when
/// `land_water` is set, `land = elevation >= 0`.
///
/// The overlay must match `base` in shape. No clamping is applied.
pub fn compose(
    base: &Field<f64>,
    mountains: Option<&Field<f64>>,
    depth: f64,
    water_level: f64,
    land_water: bool,
) -> Result<HeightMaps> {
    ensure_finite("depth", depth)?;
    ensure_finite("water_level", water_level)?;

    let elevation = match mountains {
        Some(m) => base.zip_map(m, |&b, &ridge| b * depth + ridge - water_level)?,
        None => base.map(|&b| b * depth - water_level),
    };
    let land = land_water.then(|| elevation.map(|&e| e >= 0.0));

    Ok(HeightMaps { elevation, land })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReliefError;
    use approx::assert_relative_eq;

    fn base() -> Field<f64> {
        Field::from_vec(3, 2, vec![-0.4, 0.0, 0.05, 0.1, 0.18, -0.025]).unwrap()
    }

    #[test]
    fn scales_and_offsets_without_overlay() {
        let maps = compose(&base(), None, 6000.0, 0.0, false).unwrap();
        assert!(maps.land.is_none());
        assert_relative_eq!(maps.elevation.data[0], -2400.0);
        assert_relative_eq!(maps.elevation.data[4], 1080.0, epsilon = 1e-9);
    }

    #[test]
    fn land_mask_follows_sign() {
        let maps = compose(&base(), None, 6000.0, 400.0, true).unwrap();
        let land = maps.land.as_ref().unwrap();
        assert_eq!(land.shape(), maps.elevation.shape());
        for (e, &l) in maps.elevation.data.iter().zip(&land.data) {
            assert_eq!(l, *e >= 0.0);
        }
    }

    #[test]
    fn water_level_boundary_counts_as_land() {
        let b = Field::from_vec(1, 1, vec![0.5]).unwrap();
        let maps = compose(&b, None, 800.0, 400.0, true).unwrap();
        assert_eq!(maps.elevation.data[0], 0.0);
        assert!(maps.land.unwrap().data[0]);
    }

    #[test]
    fn mountains_can_lift_cells_above_water() {
        // Base alone sits at 0 m, below a 400 m water level.
        let b = Field::filled(2, 1, 0.0);
        let m = Field::from_vec(2, 1, vec![100.0, 650.0]).unwrap();
        let maps = compose(&b, Some(&m), 6000.0, 400.0, true).unwrap();
        assert_eq!(maps.land.unwrap().data, vec![false, true]);
        assert_relative_eq!(maps.elevation.data[1], 250.0);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let m = Field::filled(2, 3, 1.0);
        assert!(matches!(
            compose(&base(), Some(&m), 1.0, 0.0, true),
            Err(ReliefError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_finite_scalars_are_rejected() {
        assert!(matches!(compose(&base(), None, f64::NAN, 0.0, true), Err(ReliefError::InvalidInput(_))));
        assert!(matches!(compose(&base(), None, 1.0, f64::INFINITY, true), Err(ReliefError::InvalidInput(_))));
    }
}
