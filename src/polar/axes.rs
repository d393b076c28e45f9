use crate::color::ColorToken;

use super::{Curve, PolarSurface};

/// Where radial labels sit until someone moves them.
pub const DEFAULT_RLABEL_POSITION: f64 = 22.5;

/// A curve drawn on [`PolarAxes`] together with its color.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarLine {
    pub curve: Curve,
    pub color: ColorToken,
}

/// In-memory polar axes: records drawn lines and the radial label angle.
/// The viewer renders it; tests inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarAxes {
    lines: Vec<PolarLine>,
    rlabel_position: f64,
}

impl Default for PolarAxes {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            rlabel_position: DEFAULT_RLABEL_POSITION,
        }
    }
}

impl PolarAxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in drawing order.
    pub fn lines(&self) -> &[PolarLine] {
        &self.lines
    }

    /// Radial label angle in degrees.
    pub fn rlabel_position(&self) -> f64 {
        self.rlabel_position
    }

    /// Remove all lines and reset the label angle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `(min, max)` radius over all lines, widened to include `0..=1`.
    pub fn radial_limits(&self) -> (f64, f64) {
        self.lines
            .iter()
            .flat_map(|l| l.curve.radius().iter().copied())
            .filter(|r| r.is_finite())
            .fold((0.0, 1.0), |(lo, hi), r| (lo.min(r), hi.max(r)))
    }
}

impl PolarSurface for PolarAxes {
    fn add_curve(&mut self, curve: Curve, color: ColorToken) {
        self.lines.push(PolarLine { curve, color });
    }

    fn set_radial_label_angle(&mut self, degrees: f64) {
        self.rlabel_position = degrees;
    }
}
