//! Color values and CSS color handling.
//!
//! Segment colors arrive either as explicit `[r, g, b]` triples or as raw
//! CSS strings (named colors, hex, `var(--x)` references). The engine only
//! needs concrete RGB when interpolating in smooth mode; everywhere else
//! strings pass through untouched and the browser resolves them.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (`#rgb`, `#rrggbb`, with or without `#`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        match hex.len() {
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .map(|v| v * 17)
                        .map_err(|_| ColorParseError::InvalidHex)
                };
                Ok(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let byte = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError::InvalidHex)
                };
                Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Parse any of the supported CSS color forms: hex, `rgb(r, g, b)`,
    /// or a basic named color.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        if let Some(body) = s
            .strip_prefix("rgb(")
            .or_else(|| s.strip_prefix("rgba("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut parts = body.split(',').map(str::trim);
            let mut component = || {
                parts
                    .next()
                    .and_then(|p| p.parse::<f64>().ok())
                    .map(|v| v.round().clamp(0.0, 255.0) as u8)
                    .ok_or(ColorParseError::InvalidRgb)
            };
            return Ok(Self::new(component()?, component()?, component()?));
        }
        Self::from_name(s).ok_or(ColorParseError::UnknownColor)
    }

    /// Look up a basic CSS color keyword.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "black" => (0, 0, 0),
            "silver" => (192, 192, 192),
            "gray" | "grey" => (128, 128, 128),
            "white" => (255, 255, 255),
            "maroon" => (128, 0, 0),
            "red" => (255, 0, 0),
            "purple" => (128, 0, 128),
            "fuchsia" | "magenta" => (255, 0, 255),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "olive" => (128, 128, 0),
            "yellow" => (255, 255, 0),
            "navy" => (0, 0, 128),
            "blue" => (0, 0, 255),
            "teal" => (0, 128, 128),
            "aqua" | "cyan" => (0, 255, 255),
            "orange" => (255, 165, 0),
            _ => return None,
        };
        Some(Self::new(rgb.0, rgb.1, rgb.2))
    }

    /// Convert to a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to an `rgb(r, g, b)` string.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other` in RGB space.
    ///
    /// `t` is clamped to `[0, 1]`; a NaN `t` is treated as `0`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid hex string length
    InvalidLength,
    /// Malformed rgb()/rgba() components
    InvalidRgb,
    /// Not a recognized color keyword
    UnknownColor,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 3 or 6)"),
            Self::InvalidRgb => write!(f, "malformed rgb() components"),
            Self::UnknownColor => write!(f, "unrecognized color keyword"),
        }
    }
}

impl std::error::Error for ColorParseError {}

/// A configured segment color: an explicit RGB triple or a raw CSS string.
///
/// Deserializes from either JSON form (`[255, 0, 0]` or `"red"` /
/// `"#ff0000"` / `"var(--state-color)"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssColor {
    /// Explicit `[r, g, b]` triple
    Rgb([u8; 3]),
    /// Raw CSS color string, passed through to the renderer
    Raw(String),
}

impl CssColor {
    /// The CSS string handed to the renderer when no interpolation is
    /// needed: triples normalize to hex, strings pass through unchanged
    /// (including custom-property references).
    #[must_use]
    pub fn as_css(&self) -> String {
        match self {
            Self::Rgb([r, g, b]) => Color::new(*r, *g, *b).to_hex(),
            Self::Raw(s) => s.clone(),
        }
    }

    /// Resolve to a concrete [`Color`], consulting `resolver` for
    /// `var(--x)` references. Returns `None` when the color cannot be
    /// resolved into RGB; callers degrade rather than fail.
    #[must_use]
    pub fn to_color(&self, resolver: Option<&dyn ColorResolver>) -> Option<Color> {
        match self {
            Self::Rgb([r, g, b]) => Some(Color::new(*r, *g, *b)),
            Self::Raw(s) => {
                let s = s.trim();
                if let Some(name) = css_variable_name(s) {
                    let resolved = resolver?.resolve(name)?;
                    Color::parse(&resolved).ok()
                } else {
                    Color::parse(s).ok()
                }
            }
        }
    }
}

impl From<[u8; 3]> for CssColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<&str> for CssColor {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for CssColor {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

/// Extract the custom-property name from a `var(--x)` or
/// `var(--x, fallback)` reference.
fn css_variable_name(s: &str) -> Option<&str> {
    let body = s.strip_prefix("var(")?.strip_suffix(')')?;
    let name = body.split(',').next().unwrap_or(body).trim();
    if name.starts_with("--") { Some(name) } else { None }
}

/// Injected lookup from a CSS custom-property name to its computed value,
/// supplied by the hosting render tree. The engine never reads styles
/// itself, which keeps it testable without a rendering environment.
pub trait ColorResolver {
    /// Resolve `--name` to its computed color string, if defined.
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digit() {
        assert_eq!(Color::from_hex("#ff0000"), Ok(Color::new(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff7f"), Ok(Color::new(0, 255, 127)));
    }

    #[test]
    fn test_from_hex_three_digit() {
        assert_eq!(Color::from_hex("#f00"), Ok(Color::new(255, 0, 0)));
        assert_eq!(Color::from_hex("#abc"), Ok(Color::new(170, 187, 204)));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
    }

    #[test]
    fn test_parse_rgb_string() {
        assert_eq!(Color::parse("rgb(1, 2, 3)"), Ok(Color::new(1, 2, 3)));
        assert_eq!(Color::parse("rgba(255, 0, 0, 0.5)"), Ok(Color::new(255, 0, 0)));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("red"), Ok(Color::new(255, 0, 0)));
        assert_eq!(Color::parse("Green"), Ok(Color::new(0, 128, 0)));
        assert_eq!(Color::parse("nonsense"), Err(ColorParseError::UnknownColor));
    }

    #[test]
    fn test_round_trips() {
        let c = Color::new(18, 52, 86);
        assert_eq!(Color::from_hex(&c.to_hex()), Ok(c));
        assert_eq!(Color::parse(&c.to_rgb_string()), Ok(c));
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::new(0, 0, 0).lerp(Color::new(255, 255, 255), 0.5);
        assert_eq!(mid, Color::new(128, 128, 128));
    }

    #[test]
    fn test_lerp_clamps_t() {
        let a = Color::new(10, 20, 30);
        let b = Color::new(200, 100, 50);
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, f64::NAN), a);
    }

    #[test]
    fn test_css_color_as_css() {
        assert_eq!(CssColor::Rgb([255, 0, 0]).as_css(), "#ff0000");
        assert_eq!(CssColor::from("var(--accent)").as_css(), "var(--accent)");
        assert_eq!(CssColor::from("tomato").as_css(), "tomato");
    }

    #[test]
    fn test_css_color_to_color_with_resolver() {
        let resolver = |name: &str| {
            (name == "--accent").then(|| "#336699".to_string())
        };
        let color = CssColor::from("var(--accent)").to_color(Some(&resolver));
        assert_eq!(color, Some(Color::new(51, 102, 153)));
    }

    #[test]
    fn test_css_color_unresolvable_variable() {
        assert_eq!(CssColor::from("var(--missing)").to_color(None), None);
        let resolver = |_: &str| None::<String>;
        assert_eq!(
            CssColor::from("var(--missing)").to_color(Some(&resolver)),
            None
        );
    }

    #[test]
    fn test_css_variable_name_with_fallback() {
        assert_eq!(css_variable_name("var(--x, red)"), Some("--x"));
        assert_eq!(css_variable_name("var(--x)"), Some("--x"));
        assert_eq!(css_variable_name("red"), None);
    }

    #[test]
    fn test_css_color_deserializes_both_forms() {
        let triple: CssColor = serde_json::from_str("[255, 0, 0]").expect("triple");
        assert_eq!(triple, CssColor::Rgb([255, 0, 0]));
        let raw: CssColor = serde_json::from_str("\"#ff0000\"").expect("string");
        assert_eq!(raw, CssColor::Raw("#ff0000".to_string()));
    }
}
