//! Gauge geometry and value-to-visual mapping engine.
//!
//! Turns a numeric reading plus a range, segment list and mode flags into
//! plain drawable data: SVG arc path strings, stroke dash pairs and CSS
//! colors. Everything here is a pure synchronous function invoked afresh on
//! every render pass; degenerate input (NaN readings, inverted ranges,
//! empty segment lists, unresolvable colors) degrades to safe defaults and
//! never panics.
//!
//! - Value mapping and arc paths: [`value_to_percentage`], [`get_angle`],
//!   [`ArcSpec`]
//! - Partial-fill dash patterns: [`stroke_dash_arc`], [`current_dash_arc`]
//! - Segment color resolution: [`compute_segments`], [`segment_label`]
//! - Segment track rendering: [`render_color_segments`]

mod color;
mod dash;
mod geometry;
mod render;
mod segment;

pub use color::{Color, ColorParseError, ColorResolver, CssColor};
pub use dash::{current_dash_arc, stroke_dash_arc, DashArc};
pub use geometry::{
    get_angle, get_angle_inverted, value_to_percentage, value_to_percentage_unclamped, ArcSpec,
    FULL_SWEEP, HALF_SWEEP, STANDARD_SWEEP,
};
pub use render::{render_color_segments, ConicGradient, GradientStop, SegmentArc, SegmentPaint};
pub use segment::{compute_segments, segment_color, segment_label, sort_segments, Segment};
