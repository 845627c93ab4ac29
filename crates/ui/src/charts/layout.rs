//! Plot geometry shared by all chart kinds. No painting happens here.

use std::f32::consts::PI;

use analytics::chart_spec::AxisDomain;
use bevy_egui::egui;

/// Screen y of `value` inside `rect`; values outside the domain are clamped
/// to the edge.
pub(crate) fn value_y(domain: AxisDomain, value: f64, rect: egui::Rect) -> f32 {
    rect.max.y - domain.normalize(value) as f32 * rect.height()
}

/// Left edge and width of category `index` when `count` categories share
/// `rect` evenly.
pub(crate) fn category_band(rect: egui::Rect, count: usize, index: usize) -> (f32, f32) {
    let width = rect.width() / count.max(1) as f32;
    (rect.min.x + index as f32 * width, width)
}

/// Category under screen x, if any.
pub(crate) fn category_at(rect: egui::Rect, count: usize, x: f32) -> Option<usize> {
    if count == 0 || x < rect.min.x || x > rect.max.x {
        return None;
    }
    let width = rect.width() / count as f32;
    let index = ((x - rect.min.x) / width) as usize;
    Some(index.min(count - 1))
}

/// Vertex on radar axis `index` of `count`, at fraction `t` of the radius.
/// Axis 0 points straight up; axes go clockwise.
pub(crate) fn radar_vertex(
    center: egui::Pos2,
    radius: f32,
    index: usize,
    count: usize,
    t: f32,
) -> egui::Pos2 {
    let angle = index as f32 * 2.0 * PI / count.max(1) as f32 - PI / 2.0;
    let r = radius * t.clamp(0.0, 1.0);
    egui::pos2(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// `count + 1` evenly spaced values from `domain.min` to `domain.max`.
pub(crate) fn tick_values(domain: AxisDomain, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| domain.min + domain.span() * i as f64 / count as f64)
        .collect()
}

/// Compact number for axis labels and tooltips.
pub(crate) fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else if abs >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Shortens `label` to at most `max_chars` characters, marking the cut.
pub(crate) fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
