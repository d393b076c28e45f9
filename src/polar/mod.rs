//! Random sine waves on polar surfaces.
//!
//! ```text
//!   rng ──► frequency k ∈ [1, 10] ──► Curve { θ ∈ [0, 2π], r = sin(kθ) }
//!    │                                        │
//!    ├──► ColorToken ─────────────────────────┤
//!    │                                        ▼
//!    └──► label angle ∈ [0°, 180°] ──► PolarSurface (e.g. PolarAxes)
//! ```

pub mod axes;

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::ColorToken;

pub use axes::{PolarAxes, PolarLine};

/// Number of angles sampled over one full turn.
pub const SAMPLE_COUNT: usize = 1000;

/// Integer frequencies a random wave is drawn from.
pub const FREQUENCIES: RangeInclusive<u32> = 1..=10;

/// Radial label angles, in whole degrees.
pub const LABEL_ANGLES: RangeInclusive<u32> = 0..=180;

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// A polyline in polar coordinates. `theta` and `radius` have equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    frequency: u32,
    theta: Vec<f64>,
    radius: Vec<f64>,
}

impl Curve {
    /// `r = sin(frequency · θ)` sampled at `samples` angles over `[0, 2π]`.
    pub fn sine(frequency: u32, samples: usize) -> Self {
        let theta = linspace(0.0, TAU, samples);
        let k = f64::from(frequency);
        let radius = theta.iter().map(|&t| (k * t).sin()).collect();
        Curve {
            frequency,
            theta,
            radius,
        }
    }

    /// Integer frequency the curve was generated from.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Angles in radians.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// `(θ, r)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.theta.iter().copied().zip(self.radius.iter().copied())
    }

    /// Cartesian `[x, y]` points with `r_origin` placed at the pole, so
    /// negative radii stay on the same side as their angle.
    pub fn to_cartesian(&self, r_origin: f64) -> Vec<[f64; 2]> {
        self.points()
            .map(|(t, r)| {
                let rho = r - r_origin;
                [rho * t.cos(), rho * t.sin()]
            })
            .collect()
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// PolarSurface
// ---------------------------------------------------------------------------

/// A drawing target with polar axes.
pub trait PolarSurface {
    /// Draw `curve` in `color`.
    fn add_curve(&mut self, curve: Curve, color: ColorToken);

    /// Place the radial tick labels along the ray at `degrees`.
    fn set_radial_label_angle(&mut self, degrees: f64);
}

/// Draw a sine wave of random integer frequency in a random palette color,
/// move the radial labels to a random angle, and return the color used.
pub fn plot_random_wave<S, R>(surface: &mut S, rng: &mut R) -> ColorToken
where
    S: PolarSurface + ?Sized,
    R: Rng + ?Sized,
{
    let frequency = rng.gen_range(FREQUENCIES);
    let curve = Curve::sine(frequency, SAMPLE_COUNT);
    let color: ColorToken = rng.gen();
    let label_angle = rng.gen_range(LABEL_ANGLES);

    log::debug!("random wave: k={frequency} color={color} rlabel={label_angle}°");

    surface.add_curve(curve, color);
    surface.set_radial_label_angle(f64::from(label_angle));
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(0.0, TAU, SAMPLE_COUNT);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[999], TAU);
        assert!((xs[1] - TAU / 999.0).abs() < 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 5.0, 1), [3.0]);
    }

    #[test]
    fn test_sine_curve() {
        let curve = Curve::sine(3, 13);
        assert_eq!(curve.len(), 13);
        assert_eq!(curve.theta().len(), curve.radius().len());
        assert_eq!(curve.frequency(), 3);
        for (t, r) in curve.points() {
            assert!((r - (3.0 * t).sin()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cartesian_negative_radius_with_origin() {
        let curve = Curve {
            frequency: 1,
            theta: vec![0.0],
            radius: vec![-0.5],
        };
        let [x, y] = curve.to_cartesian(-1.0)[0];
        assert!((x - 0.5).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }
}
