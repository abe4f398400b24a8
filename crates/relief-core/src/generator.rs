//! Pipeline orchestrator: owns the configuration, the coordinate grid and the
//! most recent result.
//!
//! Pipeline order:
//!   1. Base noise field
//!   2. Normalize to [0, 1]
//!   3. Piecewise remap
//!   4. Mountain overlay (land/water profiles only)
//!   5. Composite with depth and water level
//!
//! Normalization needs the global min/max, so the stages never interleave.
//! A run either replaces the stored maps completely or leaves them untouched.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::compose::{compose, HeightMaps};
use crate::config::GeneratorConfig;
use crate::error::{ensure_finite, ReliefError, Result};
use crate::field::{ElevationField, LandMask};
use crate::grid::Grid;
use crate::mountain::mountain_overlay;
use crate::noise::sample_field;
use crate::normalize::normalize;
use crate::profile::{Profile, ProfileKind};

// ── Named retrieval ───────────────────────────────────────────────────────────

/// Which stored map to fetch by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    Elevation,
    Land,
}

impl MapKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Elevation => "height_map",
            Self::Land => "land_map",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapKind {
    type Err = ReliefError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "height" | "height_map" => Ok(Self::Elevation),
            "land" | "land_map" => Ok(Self::Land),
            other => Err(ReliefError::NotFound(format!("no map named '{other}'"))),
        }
    }
}

/// Borrowed view of one stored map.
#[derive(Debug, Clone, Copy)]
pub enum MapRef<'a> {
    Elevation(&'a ElevationField),
    Land(&'a LandMask),
}

// ── Generator ─────────────────────────────────────────────────────────────────

pub struct MapGenerator {
    config: GeneratorConfig,
    profile: Profile,
    grid: Grid,
    maps: Option<HeightMaps>,
}

impl MapGenerator {
    /// Standard profile generator for a `width × height` grid.
    pub fn new(seed: u32, width: usize, height: usize) -> Result<Self> {
        Self::from_config(GeneratorConfig::new(seed, width, height))
    }

    pub fn with_profile(seed: u32, width: usize, height: usize, kind: ProfileKind) -> Result<Self> {
        Self::from_config(GeneratorConfig::new(seed, width, height).with_profile(kind))
    }

    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let profile = Profile::for_kind(config.profile);
        if !profile.land_water && (config.depth.is_some() || config.water_level.is_some()) {
            return Err(ReliefError::InvalidParameter(format!(
                "profile '{}' has fixed depth and no water level",
                profile.kind
            )));
        }
        let grid = Grid::new(config.width, config.height)?;
        debug!(
            seed = config.seed,
            width = config.width,
            height = config.height,
            profile = %profile.kind,
            "generator configured"
        );
        Ok(Self { config, profile, grid, maps: None })
    }

    // ── Setters ──────────────────────────────────────────────────────────────

    /// Store a new scale; the noise divisor becomes `value * scale_multiplier`.
    pub fn set_scale(&mut self, value: f64) -> Result<()> {
        ensure_finite("scale", value)?;
        if value <= 0.0 {
            return Err(ReliefError::InvalidParameter(format!("scale must be positive, got {value}")));
        }
        self.config.scale = value;
        Ok(())
    }

    pub fn set_depth(&mut self, value: f64) -> Result<()> {
        self.require_land_water("depth")?;
        ensure_finite("depth", value)?;
        self.config.depth = Some(value);
        Ok(())
    }

    pub fn set_water_level(&mut self, value: f64) -> Result<()> {
        self.require_land_water("water level")?;
        ensure_finite("water_level", value)?;
        self.config.water_level = Some(value);
        Ok(())
    }

    fn require_land_water(&self, what: &str) -> Result<()> {
        if self.profile.land_water {
            Ok(())
        } else {
            Err(ReliefError::InvalidParameter(format!(
                "{what} is not configurable in the '{}' profile",
                self.profile.kind
            )))
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Noise divisor actually used for sampling.
    pub fn effective_scale(&self) -> f64 {
        self.config.scale * self.profile.scale_multiplier
    }

    pub fn depth(&self) -> f64 {
        self.config.depth.unwrap_or(self.profile.default_depth)
    }

    pub fn water_level(&self) -> f64 {
        self.config.water_level.unwrap_or(0.0)
    }

    /// Result of the last successful run, if any.
    pub fn maps(&self) -> Option<&HeightMaps> {
        self.maps.as_ref()
    }

    /// Fetch a stored map by name (`"height"`, `"height_map"`, `"land"`, `"land_map"`).
    pub fn get_map(&self, name: &str) -> Result<MapRef<'_>> {
        let kind: MapKind = name.parse()?;
        let maps = self
            .maps
            .as_ref()
            .ok_or_else(|| ReliefError::NotFound(format!("'{kind}' has not been generated yet")))?;
        match kind {
            MapKind::Elevation => Ok(MapRef::Elevation(&maps.elevation)),
            MapKind::Land => maps
                .land
                .as_ref()
                .map(MapRef::Land)
                .ok_or_else(|| {
                    ReliefError::NotFound(format!("profile '{}' produces no land mask", self.profile.kind))
                }),
        }
    }

    // ── Generation ───────────────────────────────────────────────────────────

    /// Run the full pipeline and store the result, replacing any previous maps.
    pub fn generate_height_map(&mut self) -> Result<&ElevationField> {
        let maps = self.run_pipeline()?;

        info!(
            seed = self.config.seed,
            profile = %self.profile.kind,
            width = self.grid.width(),
            height = self.grid.height(),
            min = maps.elevation.min_value(),
            max = maps.elevation.max_value(),
            land_fraction = maps.land.as_ref().map(|l| l.true_fraction()),
            "generated height map"
        );
        Ok(&self.maps.insert(maps).elevation)
    }

    fn run_pipeline(&self) -> Result<HeightMaps> {
        let seed = self.config.seed;
        let scale = self.effective_scale();
        let backend = self.config.backend;
        let depth = self.depth();

        // ── 1–3. Base field ──────────────────────────────────────────────────
        let base_params = self.profile.base_noise(seed, scale, backend);
        let raw = sample_field(&self.grid, &base_params)?;
        let normalized = normalize(&raw)?;
        let shaped = self.profile.remap.apply(&normalized);
        debug!(tail = self.profile.remap.tail_constant, "base elevation remapped");

        // ── 4. Mountain overlay ──────────────────────────────────────────────
        let mountains = if self.profile.land_water {
            self.profile
                .mountain_noise(seed, scale, backend)
                .map(|params| mountain_overlay(&self.grid, &params, depth))
                .transpose()?
        } else {
            None
        };

        // ── 5. Composite ─────────────────────────────────────────────────────
        compose(&shaped, mountains.as_ref(), depth, self.water_level(), self.profile.land_water)
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
