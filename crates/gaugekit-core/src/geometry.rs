//! Value-to-angle mapping and SVG arc path generation.
//!
//! A gauge maps a numeric reading onto an angular sweep. The three sweep
//! constants cover the shipped gauge shapes; every function takes the sweep
//! as a parameter so the shapes can coexist.

use serde::{Deserialize, Serialize};

/// Angular span of the standard three-quarter gauge, in degrees.
pub const STANDARD_SWEEP: f64 = 270.0;

/// Angular span of the half gauge.
pub const HALF_SWEEP: f64 = 180.0;

/// Angular span of the full-circle gauge.
///
/// 359 rather than 360 keeps the start and end points of the arc path from
/// coinciding, which would make the SVG arc degenerate.
pub const FULL_SWEEP: f64 = 359.0;

/// Map `value` into `[min, max]` and return its position as a fraction in
/// `[0, 1]`.
///
/// Degenerate input never produces `NaN`: a NaN value is treated as `min`,
/// and a range where `max <= min` yields `0.0`.
#[must_use]
pub fn value_to_percentage(value: f64, min: f64, max: f64) -> f64 {
    if max <= min || value.is_nan() {
        return 0.0;
    }
    (value.clamp(min, max) - min) / (max - min)
}

/// Same mapping as [`value_to_percentage`] but without clamping.
///
/// Used to place gradient stops outside the visible value range; the result
/// may fall outside `[0, 1]`. Degenerate ranges still yield `0.0`.
#[must_use]
pub fn value_to_percentage_unclamped(value: f64, min: f64, max: f64) -> f64 {
    if max <= min || value.is_nan() {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Angle of `value` along a gauge with the given sweep, in degrees.
///
/// A NaN value degenerates to the minimum position instead of propagating.
#[must_use]
pub fn get_angle(value: f64, min: f64, max: f64, sweep: f64) -> f64 {
    let value = if value.is_nan() { min } else { value };
    value_to_percentage(value, min, max) * sweep
}

/// [`get_angle`] with the fill direction reversed: the fraction is
/// reflected as `1 - f` before scaling.
#[must_use]
pub fn get_angle_inverted(value: f64, min: f64, max: f64, sweep: f64) -> f64 {
    let value = if value.is_nan() { min } else { value };
    (1.0 - value_to_percentage(value, min, max)) * sweep
}

/// Inputs for [`ArcSpec::path`]: a circular arc around `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArcSpec {
    /// Center x coordinate
    pub x: f64,
    /// Center y coordinate
    pub y: f64,
    /// Radius (used for both axes; arcs are circular, never elliptical)
    pub r: f64,
    /// Start angle in degrees
    pub start: f64,
    /// End angle in degrees
    pub end: f64,
    /// Additional rotation applied to both endpoints, in degrees
    #[serde(default)]
    pub rotate: f64,
}

impl ArcSpec {
    /// Produce the SVG path data string for this arc:
    /// `M sx,sy A r,r rotate largeArcFlag sweepFlag ex,ey`.
    ///
    /// The large-arc flag is set when the angular delta exceeds 180 degrees
    /// and the sweep flag when the delta is positive, selecting the correct
    /// one of the four arcs through the two endpoints.
    #[must_use]
    pub fn path(&self) -> String {
        let delta = self.end - self.start;
        let large_arc = i32::from(delta.abs() > 180.0);
        let sweep = i32::from(delta > 0.0);

        let (sx, sy) = self.point_at(self.start);
        let (ex, ey) = self.point_at(self.end);

        format!(
            "M {sx},{sy} A {r},{r} {rotate} {large_arc} {sweep} {ex},{ey}",
            r = self.r,
            rotate = self.rotate,
        )
    }

    fn point_at(&self, angle: f64) -> (f64, f64) {
        let rad = (angle + self.rotate).to_radians();
        (self.x + self.r * rad.cos(), self.y + self.r * rad.sin())
    }
}
