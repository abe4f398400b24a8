//! Mountain-chain overlay.
//!
//! An independent fBm field, squared so near-zero noise flattens out and peaks
//! sharpen into ridges, scaled by depth and made non-negative. The overlay only
//! ever raises terrain.
use tracing::debug;

use crate::error::{ensure_finite, Result};
use crate::field::Field;
use crate::grid::Grid;
use crate::noise::params::NoiseParams;
use crate::noise::sample_field;

pub fn mountain_overlay(grid: &Grid, params: &NoiseParams, depth: f64) -> Result<Field<f64>> {
    ensure_finite("depth", depth)?;
    let raw = sample_field(grid, params)?;
    let overlay = raw.map(|&v| ridge(v, depth));
    debug!(max = overlay.max_value(), "mountain overlay ready");
    Ok(overlay)
}

#[inline]
fn ridge(raw: f64, depth: f64) -> f64 {
    (raw * raw * depth).abs()
}
