//! Piecewise elevation transfer curve.
//!
//! Sculpts the normalized noise distribution into terrain bands:
//!
//! | normalized v      | output          | band           |
//! |-------------------|-----------------|----------------|
//! | v ≤ 0.10          | -0.40           | ocean floor    |
//! | 0.10 < v ≤ 0.15   | 7.5v − 1.15     | coastal cliff  |
//! | 0.15 < v ≤ 0.20   | 0.5v − 0.10     | shelf          |
//! | 0.20 < v ≤ 0.30   | 0               | plains         |
//! | 0.30 < v ≤ 0.60   | 0.6v − 0.18     | hills          |
//! | v > 0.60          | v/15 + c        | highlands      |
//!
//! Breakpoints are reproduced exactly, seam included; it is part of the
//! terrain look. At v = 0.6 the hill band ends at 0.18 while the tail starts
//! at 0.04 + c, so the seam is a step of `c − 0.14` (−0.027 for c = 0.113,
//! flush for c = 0.14).
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// One linear band: `slope * v + intercept` for `v <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub upper: f64,
    pub slope: f64,
    pub intercept: f64,
}

impl Segment {
    pub const fn new(upper: f64, slope: f64, intercept: f64) -> Self {
        Self { upper, slope, intercept }
    }

    #[inline]
    fn eval(&self, v: f64) -> f64 {
        self.slope * v + self.intercept
    }
}

/// Bands shared by every profile, in ascending `upper` order.
pub const SHARED_SEGMENTS: [Segment; 5] = [
    Segment::new(0.10, 0.0, -0.40),
    Segment::new(0.15, 7.5, -1.15),
    Segment::new(0.20, 0.5, -0.10),
    Segment::new(0.30, 0.0, 0.0),
    Segment::new(0.60, 0.6, -0.18),
];

/// Slope of the highland tail.
pub const TAIL_SLOPE: f64 = 1.0 / 15.0;

/// Evaluate the curve: the first segment whose `upper` bound admits `v`, else
/// the tail `v * TAIL_SLOPE + tail_constant`.
pub fn remap(v: f64, segments: &[Segment], tail_constant: f64) -> f64 {
    segments
        .iter()
        .find(|s| v <= s.upper)
        .map(|s| s.eval(v))
        .unwrap_or_else(|| v * TAIL_SLOPE + tail_constant)
}

/// The shared band table bound to a profile's tail constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemapCurve {
    pub tail_constant: f64,
}

impl RemapCurve {
    pub const fn new(tail_constant: f64) -> Self {
        Self { tail_constant }
    }

    #[inline]
    pub fn eval(&self, v: f64) -> f64 {
        remap(v, &SHARED_SEGMENTS, self.tail_constant)
    }

    pub fn apply(&self, field: &Field<f64>) -> Field<f64> {
        field.map(|&v| self.eval(v))
    }

    /// Lowest value the curve produces on [0, 1].
    pub fn floor(&self) -> f64 {
        self.eval(0.0)
    }

    /// Highest value the curve produces on [0, 1].
    pub fn ceiling(&self) -> f64 {
        self.eval(1.0).max(self.eval(SHARED_SEGMENTS[SHARED_SEGMENTS.len() - 1].upper))
    }
}
