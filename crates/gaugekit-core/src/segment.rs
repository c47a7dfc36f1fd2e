//! Colored segment bands and value-to-color resolution.
//!
//! Segments are stored unordered and keyed by their lower threshold. Every
//! resolution pass re-sorts them into a fresh ascending sequence; nothing
//! is mutated in place.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorResolver, CssColor};

/// A color band starting at `from` and extending to the next segment's
/// threshold. The first segment also covers everything below its threshold
/// and the last extends upward without bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Lower threshold of the band
    pub from: f64,
    /// Band color
    pub color: CssColor,
    /// Optional label shown by badge renderings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Segment {
    /// Create a segment with no label.
    #[must_use]
    pub fn new(from: f64, color: impl Into<CssColor>) -> Self {
        Self {
            from,
            color: color.into(),
            label: None,
        }
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Sort segments ascending by threshold into a new vector.
///
/// The sort is stable: segments with equal `from` keep their original list
/// order, so of two equal thresholds the later-listed one wins the
/// last-match color scan. NaN thresholds compare equal and stay put.
#[must_use]
pub fn sort_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut sorted = segments.to_vec();
    sorted.sort_by(|a, b| a.from.partial_cmp(&b.from).unwrap_or(Ordering::Equal));
    sorted
}

/// Index of the segment containing `value` in an ascending-sorted slice:
/// the last segment whose threshold the value meets, falling back to the
/// first segment for values below every threshold.
fn bucket_index(value: f64, sorted: &[Segment]) -> usize {
    let mut index = 0;
    for (i, segment) in sorted.iter().enumerate().skip(1) {
        if value >= segment.from {
            index = i;
        }
    }
    index
}

/// Resolve the color for `value` against a segment list.
///
/// Returns `None` for an empty list so the caller can fall back to a theme
/// default. In smooth mode the selected and following segment colors are
/// resolved to RGB (via `resolver` for custom properties) and blended by
/// the value's fractional position between their thresholds; past the last
/// threshold the final color is returned without extrapolation. If either
/// endpoint cannot be resolved into RGB the selected segment's color is
/// returned unblended.
#[must_use]
pub fn compute_segments(
    value: f64,
    segments: &[Segment],
    smooth: bool,
    resolver: Option<&dyn ColorResolver>,
) -> Option<String> {
    if segments.is_empty() {
        return None;
    }
    let sorted = sort_segments(segments);
    let index = bucket_index(value, &sorted);
    let segment = &sorted[index];

    if !smooth {
        return Some(segment.color.as_css());
    }

    let next = sorted.get(index + 1).unwrap_or(segment);
    let (Some(a), Some(b)) = (
        segment.color.to_color(resolver),
        next.color.to_color(resolver),
    ) else {
        return Some(segment.color.as_css());
    };

    let span = next.from - segment.from;
    let t = if span > 0.0 {
        (value - segment.from) / span
    } else {
        0.0
    };
    Some(a.lerp(b, t).to_rgb_string())
}

/// Resolve the label for `value`.
///
/// Scans the sorted list from the top and returns the first segment whose
/// threshold the value meets. Unlike the color scan this does not fall back
/// to the first segment for values below every threshold; the two rules are
/// exercised by different render paths and are intentionally kept distinct.
#[must_use]
pub fn segment_label(value: f64, segments: &[Segment]) -> Option<String> {
    let sorted = sort_segments(segments);
    sorted
        .iter()
        .rev()
        .find(|segment| value >= segment.from)
        .and_then(|segment| segment.label.clone())
}

/// Resolve `value` to a concrete [`Color`] for callers that need RGB (the
/// history-graph gradient), applying the same bucket selection as
/// [`compute_segments`].
#[must_use]
pub fn segment_color(
    value: f64,
    segments: &[Segment],
    resolver: Option<&dyn ColorResolver>,
) -> Option<Color> {
    if segments.is_empty() {
        return None;
    }
    let sorted = sort_segments(segments);
    sorted[bucket_index(value, &sorted)].color.to_color(resolver)
}
