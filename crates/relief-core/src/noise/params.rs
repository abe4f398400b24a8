use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ReliefError, Result};

/// Which gradient-noise primitive the fBm sums.
///
/// `TiledGradient` honours the repeat periods and is bit-reproducible for a
/// given seed. `Perlin` delegates to `noise::Perlin`, which does not tile, so
/// the repeat periods are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseBackend {
    #[default]
    TiledGradient,
    Perlin,
}

/// Octave stack shape shared by the base field and the mountain overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveProfile {
    pub octaves: u32,
    /// Amplitude falloff per octave, in (0, 1).
    pub persistence: f64,
    /// Frequency growth per octave, > 1.
    pub lacunarity: f64,
}

/// Full parameter set for one sampled noise field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    pub seed: u32,
    /// Coordinate divisor on the y axis.
    pub scale: f64,
    /// The x axis is divided by `scale / anisotropy`; 1.0 is isotropic.
    pub anisotropy: f64,
    pub octaves: OctaveProfile,
    /// Tiling periods in noise space at the first octave.
    pub repeat_x: u32,
    pub repeat_y: u32,
    #[serde(default)]
    pub backend: NoiseBackend,
}

impl NoiseParams {
    /// Reject parameter combinations that have no meaningful fBm.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("scale", self.scale)?;
        if self.scale <= 0.0 {
            return Err(ReliefError::InvalidParameter(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        ensure_finite("anisotropy", self.anisotropy)?;
        if self.anisotropy <= 0.0 {
            return Err(ReliefError::InvalidParameter(format!(
                "anisotropy must be positive, got {}",
                self.anisotropy
            )));
        }
        let o = &self.octaves;
        if o.octaves == 0 {
            return Err(ReliefError::InvalidParameter("octaves must be at least 1".into()));
        }
        if !(o.persistence > 0.0 && o.persistence < 1.0) {
            return Err(ReliefError::InvalidParameter(format!(
                "persistence must lie in (0, 1), got {}",
                o.persistence
            )));
        }
        if !(o.lacunarity > 1.0 && o.lacunarity.is_finite()) {
            return Err(ReliefError::InvalidParameter(format!(
                "lacunarity must be finite and > 1, got {}",
                o.lacunarity
            )));
        }
        if self.repeat_x == 0 || self.repeat_y == 0 {
            return Err(ReliefError::InvalidParameter("repeat periods must be at least 1".into()));
        }
        Ok(())
    }

    /// `(x divisor, y divisor)` mapping grid coordinates into noise space.
    #[inline]
    pub fn divisors(&self) -> (f64, f64) {
        (self.scale / self.anisotropy, self.scale)
    }
}
