//! Segment geometry rendering: per-segment arc paths or a conic-gradient
//! description for smooth mode.

use serde::{Deserialize, Serialize};

use crate::color::ColorResolver;
use crate::geometry::{get_angle, ArcSpec};
use crate::segment::{sort_segments, Segment};

/// Angular length of the rounded end pieces drawn at the gauge's outer
/// boundaries, in degrees.
const END_CAP_SWEEP: f64 = 1.0;

/// Rotation aligning conic-gradient stops with the gauge's base rotation,
/// in degrees.
const GRADIENT_ALIGNMENT: f64 = 45.0;

/// One drawable arc piece of a segmented gauge track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentArc {
    /// SVG path data for the piece
    pub path: String,
    /// CSS stroke color
    pub color: String,
    /// Whether the piece is stroked with a round line cap (end pieces at
    /// the gauge's outer boundaries; interior boundaries stay butted)
    pub round_cap: bool,
}

/// A color stop of the smooth-mode gradient, placed at an absolute angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// CSS color of the stop
    pub color: String,
    /// Stop angle in degrees, already including the gauge alignment offset
    pub angle: f64,
}

/// A continuous conic-gradient description covering the whole sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConicGradient {
    /// Ordered color stops
    pub stops: Vec<GradientStop>,
}

impl ConicGradient {
    /// Render as a CSS `conic-gradient(...)` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|stop| format!("{} {}deg", stop.color, stop.angle))
            .collect();
        format!("conic-gradient({})", stops.join(", "))
    }
}

/// Drawable description of a gauge's segment track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SegmentPaint {
    /// No segments configured; the caller draws a plain track
    None,
    /// Discrete color bands as individual arc pieces
    Arcs(Vec<SegmentArc>),
    /// Smooth mode: one continuous gradient
    Gradient(ConicGradient),
}

impl SegmentPaint {
    /// Whether there is anything to draw.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Convert a segment list into its drawable description.
///
/// Non-smooth mode produces one arc piece per segment, spanning from the
/// segment's angle (zero for the first) to the next segment's angle (the
/// full sweep for the last), plus short round-capped end pieces at the two
/// outer boundaries. Smooth mode produces a single conic gradient with a
/// stop at each segment's angular position. Arcs are centered on the
/// origin; the host translates them into its viewport.
#[must_use]
pub fn render_color_segments(
    segments: &[Segment],
    min: f64,
    max: f64,
    radius: f64,
    smooth: bool,
    sweep: f64,
    resolver: Option<&dyn ColorResolver>,
) -> SegmentPaint {
    if segments.is_empty() {
        return SegmentPaint::None;
    }
    let sorted = sort_segments(segments);

    if smooth {
        let stops = sorted
            .iter()
            .map(|segment| GradientStop {
                color: segment
                    .color
                    .to_color(resolver)
                    .map_or_else(|| segment.color.as_css(), |c| c.to_rgb_string()),
                angle: get_angle(segment.from, min, max, sweep) + GRADIENT_ALIGNMENT,
            })
            .collect();
        return SegmentPaint::Gradient(ConicGradient { stops });
    }

    let arc = |start: f64, end: f64| ArcSpec {
        x: 0.0,
        y: 0.0,
        r: radius,
        start,
        end,
        rotate: 0.0,
    };

    let mut pieces = Vec::with_capacity(sorted.len() + 2);
    let last = sorted.len() - 1;
    for (i, segment) in sorted.iter().enumerate() {
        let color = segment.color.as_css();
        let start = if i == 0 {
            0.0
        } else {
            get_angle(segment.from, min, max, sweep)
        };
        let end = if i == last {
            sweep
        } else {
            get_angle(sorted[i + 1].from, min, max, sweep)
        };

        if i == 0 {
            pieces.push(SegmentArc {
                path: arc(0.0, END_CAP_SWEEP).path(),
                color: color.clone(),
                round_cap: true,
            });
        }
        pieces.push(SegmentArc {
            path: arc(start, end).path(),
            color: color.clone(),
            round_cap: false,
        });
        if i == last {
            pieces.push(SegmentArc {
                path: arc(sweep - END_CAP_SWEEP, sweep).path(),
                color,
                round_cap: true,
            });
        }
    }
    SegmentPaint::Arcs(pieces)
}
