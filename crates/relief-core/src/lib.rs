//! Seeded heightmap synthesis: layered gradient noise, a piecewise elevation
//! remap, an optional mountain overlay and a water-level land mask.

pub mod compose;
pub mod config;
pub mod error;
pub mod field;
pub mod generator;
pub mod grid;
pub mod mountain;
pub mod noise;
pub mod normalize;
pub mod profile;
pub mod remap;

pub use compose::HeightMaps;
pub use config::GeneratorConfig;
pub use error::{ReliefError, Result};
pub use field::{ElevationField, Field, LandMask};
pub use generator::{MapGenerator, MapKind, MapRef};
pub use profile::{Profile, ProfileKind};
