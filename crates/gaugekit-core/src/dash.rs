//! Dash-arc computation.
//!
//! The gauge draws one full-sweep arc path and reveals only part of it with
//! a stroke dash pattern: draw `arc` length, gap for the remainder, and
//! shift the pattern so the drawn piece begins where the fill starts. This
//! renders any partial fill or needle mark without regenerating arc
//! geometry per value.

use serde::{Deserialize, Serialize};

use crate::geometry::value_to_percentage;

/// A stroke-dasharray / stroke-dashoffset pair, applied verbatim to the
/// full-sweep arc path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashArc {
    /// Two-element dash pattern: drawn length, then gap
    pub array: String,
    /// Negative shift placing the drawn piece at the fill start
    pub offset: String,
}

/// Dash pair revealing the sub-range `[from, to]` of a gauge over
/// `[min, max]`.
///
/// A reversed or zero-width sub-range yields a zero-length arc component
/// and draws nothing. The half-unit correction in the offset hides the
/// sub-pixel seam where the dash pattern starts.
#[must_use]
pub fn stroke_dash_arc(from: f64, to: f64, min: f64, max: f64, radius: f64, sweep: f64) -> DashArc {
    let start = value_to_percentage(from, min, max);
    let end = value_to_percentage(to, min, max);
    let track = radius * 2.0 * std::f64::consts::PI * sweep / 360.0;
    let arc = ((end - start) * track).max(0.0);
    DashArc {
        array: format!("{arc} {gap}", gap = track - arc),
        offset: format!("-{}", start * track - 0.5),
    }
}

/// Dash pair for the current-value fill.
///
/// With `start_from_zero` the fill always spans between zero and the value,
/// regardless of the value's sign; otherwise it spans from `min` to the
/// value. `inverted` swaps which end of the range is the filled end.
#[must_use]
pub fn current_dash_arc(
    value: f64,
    min: f64,
    max: f64,
    radius: f64,
    sweep: f64,
    start_from_zero: bool,
    inverted: bool,
) -> DashArc {
    let (from, to) = if start_from_zero {
        // Anchored at zero in both directions; inversion is handled by the
        // angle mapping at the call site.
        if value > 0.0 {
            (0.0, value)
        } else {
            (value, 0.0)
        }
    } else if inverted {
        (value, max)
    } else {
        (min, value)
    };
    stroke_dash_arc(from, to, min, max, radius, sweep)
}
