//! Generation profiles.
//!
//! Tiling periods, scale multipliers, octave stacks and the remap tail
//! constant differ between the two supported terrain styles. They live here
//! as named configuration rather than literals scattered through the pipeline.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, Result};
use crate::noise::params::{NoiseBackend, NoiseParams, OctaveProfile};
use crate::remap::RemapCurve;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileKind {
    /// Elevation only: fixed depth, no water level, no overlay.
    #[default]
    Standard,
    /// Depth and water level are configurable; adds mountain chains and a land mask.
    Coastal,
}

impl ProfileKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Coastal => "coastal",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = ReliefError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "coastal" => Ok(Self::Coastal),
            other => Err(ReliefError::InvalidParameter(format!(
                "unknown profile '{other}' (expected 'standard' or 'coastal')"
            ))),
        }
    }
}

/// Ridge field layered on top of the base elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountainProfile {
    pub octaves: OctaveProfile,
    /// x divisor is `scale / anisotropy`, stretching ridges along y.
    pub anisotropy: f64,
    /// Added to the base seed so the ridge field is independent of the terrain.
    pub seed_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub kind: ProfileKind,
    /// User scale values are multiplied by this to get the noise divisor.
    pub scale_multiplier: f64,
    /// Noise tiling period on both axes at the first octave.
    pub repeat: u32,
    pub base_octaves: OctaveProfile,
    pub remap: RemapCurve,
    /// Vertical amplitude applied to the remapped field.
    pub default_depth: f64,
    /// Whether depth, water level and the land mask are in play.
    pub land_water: bool,
    pub mountains: Option<MountainProfile>,
}

impl Profile {
    pub const fn standard() -> Self {
        Self {
            kind: ProfileKind::Standard,
            scale_multiplier: 250.0,
            repeat: 1024,
            base_octaves: OctaveProfile { octaves: 4, persistence: 0.6, lacunarity: 2.0 },
            remap: RemapCurve::new(0.113),
            default_depth: 6000.0,
            land_water: false,
            mountains: None,
        }
    }

    pub const fn coastal() -> Self {
        Self {
            kind: ProfileKind::Coastal,
            scale_multiplier: 500.0,
            repeat: 4096,
            base_octaves: OctaveProfile { octaves: 6, persistence: 0.5, lacunarity: 2.0 },
            remap: RemapCurve::new(0.14),
            default_depth: 6000.0,
            land_water: true,
            mountains: Some(MountainProfile {
                octaves: OctaveProfile { octaves: 4, persistence: 0.45, lacunarity: 2.2 },
                anisotropy: 3.0,
                seed_offset: 0x9E37,
            }),
        }
    }

    pub const fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Standard => Self::standard(),
            ProfileKind::Coastal => Self::coastal(),
        }
    }

    /// Noise parameters for the base elevation field.
    pub fn base_noise(&self, seed: u32, scale: f64, backend: NoiseBackend) -> NoiseParams {
        NoiseParams {
            seed,
            scale,
            anisotropy: 1.0,
            octaves: self.base_octaves,
            repeat_x: self.repeat,
            repeat_y: self.repeat,
            backend,
        }
    }

    /// Noise parameters for the mountain overlay, if this profile has one.
    pub fn mountain_noise(&self, seed: u32, scale: f64, backend: NoiseBackend) -> Option<NoiseParams> {
        self.mountains.map(|m| NoiseParams {
            seed: seed.wrapping_add(m.seed_offset),
            scale,
            anisotropy: m.anisotropy,
            octaves: m.octaves,
            repeat_x: self.repeat,
            repeat_y: self.repeat,
            backend,
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::standard()
    }
}
