use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ReliefError, Result};
use crate::noise::params::NoiseBackend;
use crate::profile::ProfileKind;

/// Run configuration. Deserializable from JSON; everything except seed and
/// grid size has a default.
///
/// `depth` and `water_level` may only be set for profiles with land/water
/// semantics; `None` falls back to the profile default and 0 respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u32,
    pub width: usize,
    pub height: usize,
    /// Multiplied by the profile's scale multiplier to get the noise divisor.
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub depth: Option<f64>,
    #[serde(default)]
    pub water_level: Option<f64>,
    #[serde(default)]
    pub profile: ProfileKind,
    #[serde(default)]
    pub backend: NoiseBackend,
}

fn default_scale() -> f64 {
    1.0
}

impl GeneratorConfig {
    pub fn new(seed: u32, width: usize, height: usize) -> Self {
        Self {
            seed,
            width,
            height,
            scale: default_scale(),
            depth: None,
            water_level: None,
            profile: ProfileKind::default(),
            backend: NoiseBackend::default(),
        }
    }

    pub fn with_profile(mut self, profile: ProfileKind) -> Self {
        self.profile = profile;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check scalar ranges. Profile-dependent rules are enforced by the generator.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReliefError::InvalidParameter(format!(
                "grid dimensions must be positive, got {}×{}",
                self.width, self.height
            )));
        }
        ensure_finite("scale", self.scale)?;
        if self.scale <= 0.0 {
            return Err(ReliefError::InvalidParameter(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if let Some(depth) = self.depth {
            ensure_finite("depth", depth)?;
        }
        if let Some(water_level) = self.water_level {
            ensure_finite("water_level", water_level)?;
        }
        Ok(())
    }
}
