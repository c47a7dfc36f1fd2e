//! Integration tests: declarative gauge configs rendered end to end.

use gaugekit_core::{Segment, SegmentPaint};
use gaugekit_widgets::{GaugeBadge, GaugeCard, GaugeSweep, InnerGauge};

fn climate_segments() -> Vec<Segment> {
    vec![
        Segment::new(-20.0, "var(--info-color)").label("freezing"),
        Segment::new(5.0, [76, 175, 80]).label("mild"),
        Segment::new(28.0, "#db4437").label("hot"),
    ]
}

#[test]
fn test_card_from_json_config() {
    let json = r##"{
        "value": 21.4,
        "min": -20.0,
        "max": 45.0,
        "radius": 47.0,
        "sweep": "standard",
        "segments": [
            {"from": -20.0, "color": "var(--info-color)"},
            {"from": 5.0, "color": [76, 175, 80]},
            {"from": 28.0, "color": "#db4437"}
        ],
        "unit": "°C",
        "precision": 1
    }"##;
    let card: GaugeCard = serde_json::from_str(json).expect("config");
    let render = card.render(None);

    assert_eq!(render.display_value, "21.4 °C");
    assert_eq!(render.color.as_deref(), Some("#4caf50"));
    let SegmentPaint::Arcs(pieces) = &render.segments else {
        panic!("expected discrete segment arcs");
    };
    assert_eq!(pieces.len(), 5);
}

#[test]
fn test_card_with_resolver_resolves_theme_variables() {
    let resolver = |name: &str| (name == "--info-color").then(|| "#2196f3".to_string());
    let card = GaugeCard::with_value(-5.0)
        .range(-20.0, 45.0)
        .segments(climate_segments())
        .smooth_segments(true);
    let render = card.render(Some(&resolver));

    // -5 sits between the freezing and mild thresholds; smooth mode blends
    // the resolved theme blue toward the mild green.
    let color = render.color.expect("smooth color");
    assert!(color.starts_with("rgb("));
    assert_ne!(color, "#2196f3");
}

#[test]
fn test_card_and_badge_share_engine_semantics() {
    let segments = climate_segments();
    let card = GaugeCard::with_value(30.0)
        .range(-20.0, 45.0)
        .sweep(GaugeSweep::Half)
        .radius(13.0)
        .segments(segments.clone())
        .render(None);
    let badge = GaugeBadge::with_value(30.0)
        .range(-20.0, 45.0)
        .segments(segments)
        .render(None);

    assert_eq!(card.path, badge.path);
    assert_eq!(card.fill, badge.fill);
    assert_eq!(card.color, badge.color);
    assert_eq!(badge.label.as_deref(), Some("hot"));
}

#[test]
fn test_nested_gauges_full_pass() {
    let card = GaugeCard::with_value(64.0)
        .segments(climate_segments())
        .secondary(InnerGauge::new(0.42, 0.0, 1.0).radius(32.0))
        .tertiary(
            InnerGauge::new(880.0, 0.0, 1000.0)
                .radius(24.0)
                .needle(true)
                .segments(vec![Segment::new(0.0, "gray"), Segment::new(900.0, "red")]),
        );
    let render = card.render(None);

    let secondary = render.secondary.as_deref().expect("secondary");
    let tertiary = render.tertiary.as_deref().expect("tertiary");
    assert!(secondary.color.is_none());
    assert!(tertiary.needle);
    assert_eq!(tertiary.color.as_deref(), Some("gray"));
    assert!(!std::ptr::eq(secondary, tertiary));
}

#[test]
fn test_unavailable_reading_renders_placeholder() {
    let render = GaugeCard::with_value(f64::NAN)
        .segments(climate_segments())
        .unit("°C")
        .render(None);
    assert_eq!(render.display_value, "-");
    assert!(render.fill.array.starts_with("0 "));
    // Color still resolves to the first band rather than erroring.
    assert_eq!(render.color.as_deref(), Some("var(--info-color)"));
}
