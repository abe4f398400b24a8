//! Seeded 2D gradient noise with an integer lattice period.
//!
//! The lattice index is wrapped modulo the period before the permutation
//! lookup, so `sample(x + px, y, [px, py]) == sample(x, y, [px, py])`.
//! Periods above 256 still repeat every 256 cells because the permutation
//! table has 256 entries.
use noise::{NoiseFn, Perlin};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::params::NoiseBackend;

/// Edge gradients of the unit cube projected onto the xy plane.
const GRADIENTS: [[f64; 2]; 16] = [
    [1.0, 1.0], [-1.0, 1.0], [1.0, -1.0], [-1.0, -1.0],
    [1.0, 0.0], [-1.0, 0.0], [1.0, 0.0], [-1.0, 0.0],
    [0.0, 1.0], [0.0, -1.0], [0.0, 1.0], [0.0, -1.0],
    [1.0, 1.0], [0.0, -1.0], [-1.0, 1.0], [0.0, -1.0],
];

/// A 2D gradient-noise primitive that may honour a lattice period.
pub trait GradientSource {
    fn gradient_noise(&self, x: f64, y: f64, period: [u32; 2]) -> f64;
}

pub struct TiledGradient {
    perm: [u8; 512],
}

impl TiledGradient {
    pub fn new(seed: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
        let mut table: Vec<u8> = (0..=255u8).collect();
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().enumerate() {
            *p = table[i & 255];
        }
        Self { perm }
    }

    pub fn sample(&self, x: f64, y: f64, period: [u32; 2]) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let (i0, i1) = lattice(x0, period[0]);
        let (j0, j1) = lattice(y0, period[1]);
        let fx = x - x0;
        let fy = y - y0;

        let a = self.perm[i0] as usize;
        let b = self.perm[i1] as usize;
        let aa = self.perm[a + j0];
        let ab = self.perm[a + j1];
        let ba = self.perm[b + j0];
        let bb = self.perm[b + j1];

        let u = fade(fx);
        let v = fade(fy);
        lerp(
            v,
            lerp(u, grad(aa, fx, fy), grad(ba, fx - 1.0, fy)),
            lerp(u, grad(ab, fx, fy - 1.0), grad(bb, fx - 1.0, fy - 1.0)),
        )
    }
}

impl GradientSource for TiledGradient {
    #[inline]
    fn gradient_noise(&self, x: f64, y: f64, period: [u32; 2]) -> f64 {
        self.sample(x, y, period)
    }
}

impl GradientSource for Perlin {
    #[inline]
    fn gradient_noise(&self, x: f64, y: f64, _period: [u32; 2]) -> f64 {
        self.get([x, y])
    }
}

/// Backend chosen at runtime from `NoiseParams::backend`.
pub enum NoiseSource {
    Tiled(TiledGradient),
    Perlin(Perlin),
}

impl NoiseSource {
    pub fn new(backend: NoiseBackend, seed: u32) -> Self {
        match backend {
            NoiseBackend::TiledGradient => Self::Tiled(TiledGradient::new(seed)),
            NoiseBackend::Perlin => Self::Perlin(Perlin::new(seed)),
        }
    }
}

impl GradientSource for NoiseSource {
    #[inline]
    fn gradient_noise(&self, x: f64, y: f64, period: [u32; 2]) -> f64 {
        match self {
            Self::Tiled(t) => t.sample(x, y, period),
            Self::Perlin(p) => p.gradient_noise(x, y, period),
        }
    }
}

/// Wrapped lattice indices `(i, i + 1)` for the cell starting at `cell`.
#[inline]
fn lattice(cell: f64, period: u32) -> (usize, usize) {
    let p = i64::from(period.max(1));
    let i = (cell as i64).rem_euclid(p);
    let next = (i + 1).rem_euclid(p);
    ((i & 255) as usize, (next & 255) as usize)
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let g = GRADIENTS[(hash & 15) as usize];
    x * g[0] + y * g[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: [u32; 2] = [1 << 20, 1 << 20];

    #[test]
    fn zero_at_lattice_points() {
        let n = TiledGradient::new(3);
        for i in 0..10 {
            let v = n.sample(i as f64, (i * 3) as f64, WIDE);
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let a = TiledGradient::new(1410);
        let b = TiledGradient::new(1410);
        for k in 0..200 {
            let x = k as f64 * 0.173;
            let y = k as f64 * 0.291;
            assert_eq!(a.sample(x, y, WIDE).to_bits(), b.sample(x, y, WIDE).to_bits());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = TiledGradient::new(1);
        let b = TiledGradient::new(2);
        let differs = (0..100).any(|k| {
            let x = k as f64 * 0.37 + 0.5;
            (a.sample(x, 0.25, WIDE) - b.sample(x, 0.25, WIDE)).abs() > 1e-9
        });
        assert!(differs, "different seeds should produce different noise");
    }

    #[test]
    fn wraps_at_period() {
        let n = TiledGradient::new(99);
        let period = [16, 8];
        for k in 0..32 {
            let x = 0.25 + k as f64 * 0.5;
            let y = 0.75;
            assert_eq!(n.sample(x, y, period), n.sample(x + 16.0, y, period));
            assert_eq!(n.sample(x, y, period), n.sample(x, y + 8.0, period));
        }
    }

    #[test]
    fn output_is_bounded() {
        let n = TiledGradient::new(5);
        for k in 0..2000 {
            let v = n.sample(k as f64 * 0.0731, k as f64 * 0.1173, WIDE);
            assert!(v.abs() <= 1.0 + 1e-9, "noise {v} out of range");
        }
    }

    #[test]
    fn negative_coordinates_wrap_euclidean() {
        let n = TiledGradient::new(11);
        assert_eq!(n.sample(-3.5, 1.5, [4, 4]), n.sample(0.5, 1.5, [4, 4]));
    }

    #[test]
    fn perlin_backend_ignores_period() {
        let src = NoiseSource::new(NoiseBackend::Perlin, 8);
        let a = src.gradient_noise(0.3, 0.6, [1, 1]);
        let b = src.gradient_noise(0.3, 0.6, WIDE);
        assert_eq!(a, b);
    }
}
