//! Command-line driver: builds a generator from flags (or a JSON config file),
//! runs one generation and logs summary statistics.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use relief_core::{GeneratorConfig, MapGenerator, ProfileKind};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const DEFAULT_SEED: u32 = 1410;
const DEFAULT_SIZE: usize = 640;

#[derive(Parser, Debug)]
#[command(name = "relief", about = "Generate a seeded heightmap and report its statistics")]
struct Args {
    /// JSON file with a GeneratorConfig; flags below override its values.
    #[arg(short, long)]
    config: Option<String>,

    /// Noise seed [default: 1410]
    #[arg(short, long)]
    seed: Option<u32>,

    /// Grid columns [default: 640]
    #[arg(long)]
    width: Option<usize>,

    /// Grid rows [default: 640]
    #[arg(long)]
    height: Option<usize>,

    /// Terrain profile: standard or coastal.
    #[arg(short, long)]
    profile: Option<ProfileKind>,

    /// Scale factor, multiplied by the profile's scale constant.
    #[arg(long)]
    scale: Option<f64>,

    /// Vertical amplitude (coastal profile only).
    #[arg(long)]
    depth: Option<f64>,

    /// Sea level offset (coastal profile only).
    #[arg(long)]
    water_level: Option<f64>,

    /// Print the summary as JSON on stdout.
    #[arg(long)]
    json: bool,
}

/// Start from the config file (or built-in defaults) and apply every flag the
/// user actually passed on top of it.
fn resolve_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            GeneratorConfig::from_json(&text).with_context(|| format!("parsing {path}"))?
        }
        None => GeneratorConfig::new(DEFAULT_SEED, DEFAULT_SIZE, DEFAULT_SIZE),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    if let Some(depth) = args.depth {
        config.depth = Some(depth);
    }
    if let Some(level) = args.water_level {
        config.water_level = Some(level);
    }
    Ok(config)
}

fn summary_json(generator: &MapGenerator) -> Option<Value> {
    let maps = generator.maps()?;
    let elevation = &maps.elevation;
    let (rows, cols) = elevation.shape();
    Some(serde_json::json!({
        "seed": generator.config().seed,
        "profile": generator.profile().kind,
        "rows": rows,
        "cols": cols,
        "min": elevation.min_value(),
        "max": elevation.max_value(),
        "mean": elevation.mean(),
        "land_fraction": maps.land.as_ref().map(|l| l.true_fraction()),
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let mut generator = MapGenerator::from_config(config).context("configuring generator")?;

    let elevation = generator.generate_height_map().context("generating height map")?;
    let (rows, cols) = elevation.shape();
    let (min, max, mean) = (elevation.min_value(), elevation.max_value(), elevation.mean());

    if args.json {
        let summary = summary_json(&generator).context("no maps after generation")?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        tracing::info!("Elevation {rows}×{cols}: min {min:.1}, max {max:.1}, mean {mean:.1}");
        if let Some(f) = generator.maps().and_then(|m| m.land.as_ref()).map(|l| l.true_fraction()) {
            tracing::info!("Land fraction: {:.1}%", f * 100.0);
        }
    }

    Ok(())
}
