//! Preview renderer: writes PNG images of a generated heightmap.
//! Reads the generator's maps read-only; pixel (0, 0) is grid cell (1, 1).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use relief_core::{ElevationField, LandMask, MapGenerator, ProfileKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render heightmap previews to PNG")]
struct Args {
    #[arg(short, long, default_value_t = 1410)]
    seed: u32,

    #[arg(long, default_value_t = 640)]
    width: usize,

    #[arg(long, default_value_t = 640)]
    height: usize,

    #[arg(short, long, default_value = "standard")]
    profile: ProfileKind,

    /// Sea level offset (coastal profile only).
    #[arg(long)]
    water_level: Option<f64>,

    #[arg(short, long, default_value = "data/preview")]
    out_dir: PathBuf,
}

// ── Colour helpers ────────────────────────────────────────────────────────────

/// Elevation → colour: deep blue below zero, green → brown → white above.
fn terrain_color(z: f64, lo: f64, hi: f64) -> [u8; 3] {
    if z < 0.0 {
        let t = if lo < 0.0 { (z / lo).clamp(0.0, 1.0) } else { 0.0 };
        let g = (160.0 * (1.0 - t)) as u8;
        [20, g, (230.0 - 90.0 * t) as u8]
    } else {
        let t = if hi > 0.0 { (z / hi).clamp(0.0, 1.0) } else { 0.0 };
        if t < 0.5 {
            let s = t * 2.0;
            [(60.0 + 100.0 * s) as u8, (150.0 - 40.0 * s) as u8, (60.0 - 20.0 * s) as u8] // green → brown
        } else {
            let s = (t - 0.5) * 2.0;
            let c = |from: f64| (from + (255.0 - from) * s) as u8;
            [c(160.0), c(110.0), c(40.0)] // brown → white
        }
    }
}

fn render_elevation(field: &ElevationField) -> image::RgbImage {
    let (lo, hi) = (field.min_value(), field.max_value());
    let mut img = image::RgbImage::new(field.width as u32, field.height as u32);
    for (r, row) in field.rows().enumerate() {
        for (c, &z) in row.iter().enumerate() {
            img.put_pixel(c as u32, r as u32, image::Rgb(terrain_color(z, lo, hi)));
        }
    }
    img
}

fn render_land(mask: &LandMask) -> image::RgbImage {
    let mut img = image::RgbImage::new(mask.width as u32, mask.height as u32);
    for (r, row) in mask.rows().enumerate() {
        for (c, &is_land) in row.iter().enumerate() {
            let px = if is_land { [90u8, 160, 70] } else { [40u8, 90, 200] };
            img.put_pixel(c as u32, r as u32, image::Rgb(px));
        }
    }
    img
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut generator = MapGenerator::with_profile(args.seed, args.width, args.height, args.profile)?;
    if let Some(level) = args.water_level {
        generator.set_water_level(level)?;
    }

    tracing::info!("Generating {}×{} ({})…", args.width, args.height, args.profile);
    generator.generate_height_map()?;
    let maps = generator.maps().context("generator produced no maps")?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let path = args.out_dir.join("elevation.png");
    render_elevation(&maps.elevation)
        .save(&path)
        .with_context(|| format!("saving {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());

    if let Some(land) = &maps.land {
        let path = args.out_dir.join("land.png");
        render_land(land)
            .save(&path)
            .with_context(|| format!("saving {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }

    Ok(())
}
