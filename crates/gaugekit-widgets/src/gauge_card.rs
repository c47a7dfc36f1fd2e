//! `GaugeCard` widget: the primary gauge view-model.
//!
//! The card owns up to three gauges (primary plus optional secondary and
//! tertiary inner gauges) and turns each into plain drawable data via the
//! shared engine. Rendering is a pure function of the configuration; every
//! call recomputes from scratch.

use serde::{Deserialize, Serialize};

use gaugekit_core::{
    compute_segments, current_dash_arc, render_color_segments, stroke_dash_arc, ArcSpec,
    ColorResolver, CssColor, DashArc, Segment, SegmentPaint, FULL_SWEEP, HALF_SWEEP,
    STANDARD_SWEEP,
};

use crate::formats::format_value;

/// Gauge shape, selecting the angular span of the arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeSweep {
    /// Three-quarter gauge (270 degrees)
    #[default]
    Standard,
    /// Half gauge (180 degrees)
    Half,
    /// Full-circle gauge (359 degrees, leaving a seam)
    Full,
}

impl GaugeSweep {
    /// Angular span in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        match self {
            Self::Standard => STANDARD_SWEEP,
            Self::Half => HALF_SWEEP,
            Self::Full => FULL_SWEEP,
        }
    }
}

/// Configuration of a secondary or tertiary gauge nested inside the card.
///
/// Inner gauges are computed independently of the primary and of each
/// other; they only share the render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerGauge {
    /// Current reading
    pub value: f64,
    /// Range minimum
    pub min: f64,
    /// Range maximum
    pub max: f64,
    /// Arc radius
    pub radius: f64,
    /// Color bands
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Draw a pointer mark instead of a filled arc
    #[serde(default)]
    pub needle: bool,
    /// Interpolate colors continuously between thresholds
    #[serde(default)]
    pub smooth_segments: bool,
}

impl InnerGauge {
    /// Create an inner gauge over `[min, max]`.
    #[must_use]
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self {
            value,
            min,
            max,
            radius: 32.0,
            segments: Vec::new(),
            needle: false,
            smooth_segments: false,
        }
    }

    /// Set the arc radius.
    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(0.0);
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
}

/// Primary gauge card configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeCard {
    /// Current reading
    pub value: f64,
    /// Range minimum
    pub min: f64,
    /// Range maximum
    pub max: f64,
    /// Arc radius of the primary gauge
    pub radius: f64,
    /// Gauge shape
    #[serde(default)]
    pub sweep: GaugeSweep,
    /// Color bands
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Draw a pointer mark instead of a filled arc
    #[serde(default)]
    pub needle: bool,
    /// Fill between zero and the value instead of from the range minimum
    #[serde(default)]
    pub start_from_zero: bool,
    /// Reverse the fill direction
    #[serde(default)]
    pub inverted: bool,
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
    /// Optional secondary gauge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<InnerGauge>,
    /// Optional tertiary gauge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<InnerGauge>,
}

impl Default for GaugeCard {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            radius: 47.0,
            sweep: GaugeSweep::Standard,
            segments: Vec::new(),
            needle: false,
            start_from_zero: false,
            inverted: false,
            smooth_segments: false,
            color: None,
            unit: None,
            precision: None,
            secondary: None,
            tertiary: None,
        }
    }
}

impl GaugeCard {
    /// Create a card with the default `[0, 100]` range.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card showing the given reading.
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

    /// Add one color band.
    #[must_use]
    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Enable needle mode.
    #[must_use]
    pub const fn needle(mut self, needle: bool) -> Self {
        self.needle = needle;
        self
    }

    /// Fill between zero and the value, whatever the value's sign.
    #[must_use]
    pub const fn start_from_zero(mut self, start_from_zero: bool) -> Self {
        self.start_from_zero = start_from_zero;
        self
    }

    /// Reverse the fill direction.
    #[must_use]
    pub const fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
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

    /// Attach a secondary gauge.
    #[must_use]
    pub fn secondary(mut self, gauge: InnerGauge) -> Self {
        self.secondary = Some(gauge);
        self
    }

    /// Attach a tertiary gauge.
    #[must_use]
    pub fn tertiary(mut self, gauge: InnerGauge) -> Self {
        self.tertiary = Some(gauge);
        self
    }

    /// Compute the drawable description of the card.
    ///
    /// `resolver` supplies computed values for CSS custom properties used
    /// in segment colors; pass `None` outside a rendering environment and
    /// variable references pass through for the browser to resolve.
    #[must_use]
    pub fn render(&self, resolver: Option<&dyn ColorResolver>) -> GaugeRender {
        let sweep = self.sweep.degrees();
        let mut render = render_gauge(
            &GaugeInput {
                value: self.value,
                min: self.min,
                max: self.max,
                radius: self.radius,
                sweep,
                segments: &self.segments,
                needle: self.needle,
                start_from_zero: self.start_from_zero,
                inverted: self.inverted,
                smooth_segments: self.smooth_segments,
                color: self.color.as_ref(),
            },
            resolver,
        );
        render.display_value = format_value(self.value, self.precision, self.unit.as_deref());
        render.secondary = self.secondary.as_ref().map(|g| Box::new(g.render_with(sweep, resolver)));
        render.tertiary = self.tertiary.as_ref().map(|g| Box::new(g.render_with(sweep, resolver)));
        render
    }
}

impl InnerGauge {
    /// Compute the drawable description of an inner gauge, sharing the
    /// card's sweep.
    fn render_with(&self, sweep: f64, resolver: Option<&dyn ColorResolver>) -> GaugeRender {
        let mut render = render_gauge(
            &GaugeInput {
                value: self.value,
                min: self.min,
                max: self.max,
                radius: self.radius,
                sweep,
                segments: &self.segments,
                needle: self.needle,
                start_from_zero: false,
                inverted: false,
                smooth_segments: self.smooth_segments,
                color: None,
            },
            resolver,
        );
        render.display_value = format_value(self.value, None, None);
        render
    }
}

/// Drawable description of one gauge, ready to be painted by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeRender {
    /// Full-sweep base arc path; fill and needle dashes apply to it
    pub path: String,
    /// Dash pair revealing the filled portion (or the needle mark)
    pub fill: DashArc,
    /// Whether `fill` is a needle mark rather than a partial fill
    pub needle: bool,
    /// Resolved fill color, or `None` for the theme default
    pub color: Option<String>,
    /// Segment track description
    pub segments: SegmentPaint,
    /// Formatted reading for the center label
    pub display_value: String,
    /// Rendered secondary gauge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Box<GaugeRender>>,
    /// Rendered tertiary gauge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary: Option<Box<GaugeRender>>,
}

/// Flattened per-gauge inputs shared by card, inner and badge rendering.
pub(crate) struct GaugeInput<'a> {
    pub(crate) value: f64,
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) radius: f64,
    pub(crate) sweep: f64,
    pub(crate) segments: &'a [Segment],
    pub(crate) needle: bool,
    pub(crate) start_from_zero: bool,
    pub(crate) inverted: bool,
    pub(crate) smooth_segments: bool,
    pub(crate) color: Option<&'a CssColor>,
}

/// One gauge's worth of engine calls: base arc, fill or needle dash,
/// resolved color, segment track.
pub(crate) fn render_gauge(
    input: &GaugeInput<'_>,
    resolver: Option<&dyn ColorResolver>,
) -> GaugeRender {
    let path = ArcSpec {
        x: 0.0,
        y: 0.0,
        r: input.radius,
        start: 0.0,
        end: input.sweep,
        rotate: 0.0,
    }
    .path();

    // Needle mode renders a zero-length arc positioned at the value's
    // angle instead of a fill from the range start.
    let fill = if input.needle {
        stroke_dash_arc(
            input.value,
            input.value,
            input.min,
            input.max,
            input.radius,
            input.sweep,
        )
    } else {
        current_dash_arc(
            input.value,
            input.min,
            input.max,
            input.radius,
            input.sweep,
            input.start_from_zero,
            input.inverted,
        )
    };

    let color = input.color.map_or_else(
        || {
            compute_segments(
                input.value,
                input.segments,
                input.smooth_segments,
                resolver,
            )
        },
        |c| Some(c.as_css()),
    );

    let segments = render_color_segments(
        input.segments,
        input.min,
        input.max,
        input.radius,
        input.smooth_segments,
        input.sweep,
        resolver,
    );

    GaugeRender {
        path,
        fill,
        needle: input.needle,
        color,
        segments,
        display_value: String::new(),
        secondary: None,
        tertiary: None,
    }
}
