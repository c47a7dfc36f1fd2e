//! Fallback formatting for the displayed reading.
//!
//! Hosts normally supply a locale-aware formatter; this covers the case
//! where none is configured.

/// Format a reading with optional precision and unit suffix.
///
/// Without an explicit precision, whole numbers drop the decimal point and
/// everything else keeps one decimal. NaN renders as a placeholder dash.
#[must_use]
pub fn format_value(value: f64, precision: Option<usize>, unit: Option<&str>) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    let number = match precision {
        Some(p) => format!("{value:.p$}"),
        None if value == value.trunc() => format!("{value:.0}"),
        None => format!("{value:.1}"),
    };
    match unit {
        Some(unit) => format!("{number} {unit}"),
        None => number,
    }
}
