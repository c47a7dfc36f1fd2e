//! `GaugeBadge` widget: the compact badge variant.
//!
//! Badges render a small half-sweep arc and surface the matched segment's
//! label next to the reading. Label lookup scans thresholds from the top,
//! a deliberately different rule from the card's color resolution.

use serde::{Deserialize, Serialize};

use gaugekit_core::{segment_label, ColorResolver, CssColor, DashArc, Segment, SegmentPaint};

use crate::formats::format_value;
use crate::gauge_card::{render_gauge, GaugeInput, GaugeSweep};

/// Compact badge gauge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeBadge {
    /// Current reading
    pub value: f64,
    /// Range minimum
    pub min: f64,
    /// Range maximum
    pub max: f64,
    /// Arc radius
    pub radius: f64,
    /// Gauge shape
    #[serde(default = "GaugeBadge::default_sweep")]
    pub sweep: GaugeSweep,
    /// Color bands
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Draw a pointer mark instead of a filled arc
    #[serde(default)]
    pub needle: bool,
    /// Interpolate colors continuously between thresholds
    #[serde(default)]
    pub smooth_segments: bool,
    /// Explicit fill color overriding segment resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
    /// Unit suffix for the displayed reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Decimal places for the displayed reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl Default for GaugeBadge {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            radius: 13.0,
            sweep: Self::default_sweep(),
            segments: Vec::new(),
            needle: false,
            smooth_segments: false,
            color: None,
            unit: None,
            precision: None,
        }
    }
}

impl GaugeBadge {
    const fn default_sweep() -> GaugeSweep {
        GaugeSweep::Half
    }

    /// Create a badge with the default `[0, 100]` range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a badge showing the given reading.
    #[must_use]
    pub fn with_value(value: f64) -> Self {
        Self::default().value(value)
    }

    /// Set the reading.
    #[must_use]
    pub const fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the value range.
    #[must_use]
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the arc radius.
    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    /// Set the gauge shape.
    #[must_use]
    pub const fn sweep(mut self, sweep: GaugeSweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Set the color bands.
    #[must_use]
    pub fn segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = segments;
        self
    }

    /// Enable needle mode.
    #[must_use]
    pub const fn needle(mut self, needle: bool) -> Self {
        self.needle = needle;
        self
    }

    /// Enable smooth segment interpolation.
    #[must_use]
    pub const fn smooth_segments(mut self, smooth: bool) -> Self {
        self.smooth_segments = smooth;
        self
    }

    /// Override the resolved fill color.
    #[must_use]
    pub fn color(mut self, color: impl Into<CssColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the unit suffix.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the display precision.
    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Compute the drawable description of the badge.
    #[must_use]
    pub fn render(&self, resolver: Option<&dyn ColorResolver>) -> BadgeRender {
        let gauge = render_gauge(
            &GaugeInput {
                value: self.value,
                min: self.min,
                max: self.max,
                radius: self.radius,
                sweep: self.sweep.degrees(),
                segments: &self.segments,
                needle: self.needle,
                start_from_zero: false,
                inverted: false,
                smooth_segments: self.smooth_segments,
                color: self.color.as_ref(),
            },
            resolver,
        );
        BadgeRender {
            path: gauge.path,
            fill: gauge.fill,
            needle: gauge.needle,
            color: gauge.color,
            segments: gauge.segments,
            label: segment_label(self.value, &self.segments),
            display_value: format_value(self.value, self.precision, self.unit.as_deref()),
        }
    }
}

/// Drawable description of a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeRender {
    /// Full-sweep base arc path
    pub path: String,
    /// Dash pair revealing the filled portion (or the needle mark)
    pub fill: DashArc,
    /// Whether `fill` is a needle mark
    pub needle: bool,
    /// Resolved fill color, or `None` for the theme default
    pub color: Option<String>,
    /// Segment track description
    pub segments: SegmentPaint,
    /// Matched segment label, if the matched segment carries one
    pub label: Option<String>,
    /// Formatted reading
    pub display_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_bands() -> Vec<Segment> {
        vec![
            Segment::new(0.0, "red").label("low"),
            Segment::new(50.0, "blue").label("medium"),
            Segment::new(80.0, "green").label("high"),
        ]
    }

    #[test]
    fn test_badge_defaults_to_half_sweep() {
        let badge = GaugeBadge::new();
        assert_eq!(badge.sweep, GaugeSweep::Half);
        assert_eq!(badge.radius, 13.0);
    }

    #[test]
    fn test_badge_render_label_and_color() {
        let render = GaugeBadge::with_value(64.0)
            .segments(labeled_bands())
            .render(None);
        assert_eq!(render.label.as_deref(), Some("medium"));
        assert_eq!(render.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_badge_label_missing_below_first_threshold() {
        // The descending label scan finds nothing below every threshold,
        // while color resolution still falls back to the first band.
        let render = GaugeBadge::with_value(-5.0)
            .segments(labeled_bands())
            .render(None);
        assert_eq!(render.label, None);
        assert_eq!(render.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_badge_boundary_value_takes_upper_label() {
        let render = GaugeBadge::with_value(80.0)
            .segments(labeled_bands())
            .render(None);
        assert_eq!(render.label.as_deref(), Some("high"));
    }

    #[test]
    fn test_badge_needle_render() {
        let render = GaugeBadge::with_value(25.0).needle(true).render(None);
        assert!(render.needle);
        assert!(render.fill.array.starts_with("0 "));
    }

    #[test]
    fn test_badge_display_value() {
        let render = GaugeBadge::with_value(3.14159).precision(2).unit("bar").render(None);
        assert_eq!(render.display_value, "3.14 bar");
    }

    #[test]
    fn test_badge_config_round_trip() {
        let badge = GaugeBadge::with_value(42.0)
            .segments(labeled_bands())
            .sweep(GaugeSweep::Standard)
            .color("var(--badge-color)");
        let json = serde_json::to_string(&badge).expect("serialize");
        let back: GaugeBadge = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, badge);
    }

    #[test]
    fn test_badge_sparse_json_defaults_to_half() {
        let badge: GaugeBadge =
            serde_json::from_str(r#"{"value": 1.0, "min": 0.0, "max": 2.0, "radius": 13.0}"#)
                .expect("deserialize");
        assert_eq!(badge.sweep, GaugeSweep::Half);
    }
}
