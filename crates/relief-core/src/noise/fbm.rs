//! Fractional Brownian motion over a tiling gradient source.
//!
//! Octave k is sampled at `(x, y) * lacunarity^k` with weight `persistence^k`
//! and lattice period `repeat * lacunarity^k`, so every octave tiles with the
//! same period in input space. The weighted sum is divided by the sum of
//! weights, keeping the output roughly within ±1.
use super::params::{NoiseParams, OctaveProfile};
use super::tiled::{GradientSource, NoiseSource};

pub struct Fbm<S> {
    source: S,
    profile: OctaveProfile,
    repeat: [u32; 2],
}

impl Fbm<NoiseSource> {
    /// Build the sampler described by `params`. Callers validate first.
    pub fn from_params(params: &NoiseParams) -> Self {
        Self::new(
            NoiseSource::new(params.backend, params.seed),
            params.octaves,
            [params.repeat_x, params.repeat_y],
        )
    }
}

impl<S: GradientSource> Fbm<S> {
    pub fn new(source: S, profile: OctaveProfile, repeat: [u32; 2]) -> Self {
        Self { source, profile, repeat }
    }

    /// Evaluate fBm at noise-space `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut value = 0.0f64;
        let mut weight_sum = 0.0f64;
        let mut amp = 1.0f64;
        let mut freq = 1.0f64;
        for _ in 0..self.profile.octaves {
            let period = [octave_period(self.repeat[0], freq), octave_period(self.repeat[1], freq)];
            value += amp * self.source.gradient_noise(x * freq, y * freq, period);
            weight_sum += amp;
            amp *= self.profile.persistence;
            freq *= self.profile.lacunarity;
        }
        if weight_sum > 0.0 { value / weight_sum } else { 0.0 }
    }
}

/// Lattice period of an octave: the base period scaled by its frequency,
/// truncated, never below one cell.
#[inline]
fn octave_period(repeat: u32, freq: f64) -> u32 {
    ((f64::from(repeat) * freq) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::tiled::TiledGradient;

    fn profile(octaves: u32) -> OctaveProfile {
        OctaveProfile { octaves, persistence: 0.6, lacunarity: 2.0 }
    }

    #[test]
    fn single_octave_matches_source() {
        let fbm = Fbm::new(TiledGradient::new(4), profile(1), [1024, 1024]);
        let direct = TiledGradient::new(4).sample(0.37, 0.81, [1024, 1024]);
        assert_eq!(fbm.sample(0.37, 0.81), direct);
    }

    #[test]
    fn produces_non_constant_output() {
        let fbm = Fbm::new(TiledGradient::new(42), profile(4), [1024, 1024]);
        let values: Vec<f64> = (0..256).map(|k| fbm.sample(k as f64 * 0.05, 0.3)).collect();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max - min > 0.05, "fBm range {min}..{max} is too flat");
    }

    #[test]
    fn whole_stack_tiles_at_base_period() {
        let fbm = Fbm::new(TiledGradient::new(17), profile(3), [8, 8]);
        for k in 0..16 {
            let x = 0.25 + k as f64 * 0.5;
            let y = 1.75;
            assert_eq!(fbm.sample(x, y), fbm.sample(x + 8.0, y));
            assert_eq!(fbm.sample(x, y), fbm.sample(x, y + 8.0));
        }
    }

    #[test]
    fn octave_period_never_zero() {
        assert_eq!(octave_period(0, 2.0), 1);
        assert_eq!(octave_period(1024, 4.0), 4096);
        assert_eq!(octave_period(3, 2.5), 7);
    }
}
