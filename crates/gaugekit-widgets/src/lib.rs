//! Gauge card and badge view-model builders.
//!
//! Both widgets are thin, pure assemblies over [`gaugekit_core`]: builder
//! structs describing a gauge, and `render` methods turning them into plain
//! drawable data (arc paths, dash pairs, colors) for the host to paint.

pub mod formats;
pub mod gauge_badge;
pub mod gauge_card;

pub use formats::format_value;
pub use gauge_badge::{BadgeRender, GaugeBadge};
pub use gauge_card::{GaugeCard, GaugeRender, GaugeSweep, InnerGauge};
