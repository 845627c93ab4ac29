//! Painter routines for each chart kind, plus legend and gap handling.

use analytics::chart_spec::{AxisDomain, ChartData, SeriesColor, SeriesSpec};
use analytics::shape::ChartSeriesPoint;
use bevy_egui::egui;

use super::layout::{
    category_at, category_band, format_value, radar_vertex, tick_values, truncate_label, value_y,
};

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(30);
const GRID: egui::Color32 = egui::Color32::from_gray(50);
const AXIS_TEXT: egui::Color32 = egui::Color32::from_gray(160);
const AXIS_GUTTER: f32 = 40.0;
const LABEL_GUTTER: f32 = 18.0;

pub(crate) fn color32(color: SeriesColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}

fn small_font() -> egui::FontId {
    egui::FontId::proportional(10.0)
}

/// Allocates the chart rect, paints the background, and returns the inner
/// plot area plus the hover response.
fn plot_frame(
    ui: &mut egui::Ui,
    width: f32,
    height: f32,
) -> (egui::Painter, egui::Rect, egui::Response) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, BACKGROUND);
    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + AXIS_GUTTER, rect.min.y + 6.0),
        egui::pos2(rect.max.x - 6.0, rect.max.y - LABEL_GUTTER),
    );
    (painter, plot, response)
}

fn draw_value_axis(painter: &egui::Painter, plot: egui::Rect, domain: AxisDomain) {
    for tick in tick_values(domain, 4) {
        let y = value_y(domain, tick, plot);
        painter.line_segment(
            [egui::pos2(plot.min.x, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(0.3, GRID),
        );
        painter.text(
            egui::pos2(plot.min.x - 4.0, y),
            egui::Align2::RIGHT_CENTER,
            format_value(tick),
            small_font(),
            AXIS_TEXT,
        );
    }
}

fn draw_category_labels(painter: &egui::Painter, plot: egui::Rect, chart: &ChartData) {
    let count = chart.points.len();
    let (_, band) = category_band(plot, count, 0);
    let max_chars = ((band / 6.0) as usize).max(3);
    for (i, point) in chart.points.iter().enumerate() {
        let (left, width) = category_band(plot, count, i);
        painter.text(
            egui::pos2(left + width / 2.0, plot.max.y + 3.0),
            egui::Align2::CENTER_TOP,
            truncate_label(&point.label(&chart.spec.category_key), max_chars),
            small_font(),
            AXIS_TEXT,
        );
    }
}

/// Hover text for one category: its full label and every present value.
pub(super) fn tooltip_text(chart: &ChartData, point: &ChartSeriesPoint) -> String {
    let mut lines = vec![point.label(&chart.spec.category_key)];
    for series in &chart.spec.series {
        let value = match point.number(&series.key) {
            Some(v) => format_value(v),
            None => "n/a".to_string(),
        };
        lines.push(format!("{}: {value}", series.label));
    }
    lines.join("\n")
}

fn attach_tooltip(response: egui::Response, plot: egui::Rect, chart: &ChartData) {
    let Some(pos) = response.hover_pos() else {
        return;
    };
    if let Some(index) = category_at(plot, chart.points.len(), pos.x) {
        let text = tooltip_text(chart, &chart.points[index]);
        response.on_hover_text(text);
    }
}

// -----------------------------------------------------------------------
// Bars
// -----------------------------------------------------------------------

/// Side-by-side bars, one per series, per category. Missing values leave an
/// empty slot.
pub(crate) fn draw_grouped_bars(ui: &mut egui::Ui, chart: &ChartData, width: f32, height: f32) {
    let (painter, plot, response) = plot_frame(ui, width, height);
    let domain = chart.value_domain();
    draw_value_axis(&painter, plot, domain);

    let count = chart.points.len();
    let slots = chart.spec.series.len().max(1);
    let baseline = value_y(domain, 0.0_f64.clamp(domain.min, domain.max), plot);

    for (i, point) in chart.points.iter().enumerate() {
        let (left, band) = category_band(plot, count, i);
        let bar_width = band * 0.8 / slots as f32;
        let start = left + band * 0.1;
        for (j, series) in chart.spec.series.iter().enumerate() {
            let Some(value) = point.number(&series.key) else {
                continue;
            };
            let top = value_y(domain, value, plot);
            let x = start + j as f32 * bar_width;
            let bar = egui::Rect::from_min_max(
                egui::pos2(x, top.min(baseline)),
                egui::pos2(x + bar_width - 1.0, top.max(baseline)),
            );
            painter.rect_filled(bar, 1.0, color32(series.color));
        }
    }

    draw_category_labels(&painter, plot, chart);
    attach_tooltip(response, plot, chart);
}

/// Stack groups in series order. Series without a stack id form their own
/// single-series group.
pub(super) fn stack_groups(series: &[SeriesSpec]) -> Vec<Vec<&SeriesSpec>> {
    let mut groups: Vec<(Option<&str>, Vec<&SeriesSpec>)> = Vec::new();
    for s in series {
        let id = s.stack.as_deref();
        match groups.iter_mut().find(|(g, _)| id.is_some() && *g == id) {
            Some((_, members)) => members.push(s),
            None => groups.push((id, vec![s])),
        }
    }
    groups.into_iter().map(|(_, members)| members).collect()
}

pub(crate) fn draw_stacked_bars(ui: &mut egui::Ui, chart: &ChartData, width: f32, height: f32) {
    let (painter, plot, response) = plot_frame(ui, width, height);
    let domain = chart.value_domain();
    draw_value_axis(&painter, plot, domain);

    let groups = stack_groups(&chart.spec.series);
    let count = chart.points.len();
    let slots = groups.len().max(1);

    for (i, point) in chart.points.iter().enumerate() {
        let (left, band) = category_band(plot, count, i);
        let bar_width = band * 0.6 / slots as f32;
        let start = left + band * 0.2;
        for (g, members) in groups.iter().enumerate() {
            let x = start + g as f32 * bar_width;
            let mut running = 0.0_f64;
            for series in members {
                let Some(value) = point.number(&series.key) else {
                    continue;
                };
                let bottom = value_y(domain, running, plot);
                running += value;
                let top = value_y(domain, running, plot);
                let segment = egui::Rect::from_min_max(
                    egui::pos2(x, top.min(bottom)),
                    egui::pos2(x + bar_width - 1.0, top.max(bottom)),
                );
                painter.rect_filled(segment, 0.0, color32(series.color));
            }
        }
    }

    draw_category_labels(&painter, plot, chart);
    attach_tooltip(response, plot, chart);
}

// -----------------------------------------------------------------------
// Line
// -----------------------------------------------------------------------

/// One polyline per series through category centers. A missing value breaks
/// the line.
pub(crate) fn draw_line_chart(ui: &mut egui::Ui, chart: &ChartData, width: f32, height: f32) {
    let (painter, plot, response) = plot_frame(ui, width, height);
    let domain = chart.value_domain();
    draw_value_axis(&painter, plot, domain);

    let count = chart.points.len();
    for series in &chart.spec.series {
        let color = color32(series.color);
        let mut previous: Option<egui::Pos2> = None;
        for (i, point) in chart.points.iter().enumerate() {
            let Some(value) = point.number(&series.key) else {
                previous = None;
                continue;
            };
            let (left, band) = category_band(plot, count, i);
            let pos = egui::pos2(left + band / 2.0, value_y(domain, value, plot));
            if let Some(prev) = previous {
                painter.line_segment([prev, pos], egui::Stroke::new(2.0, color));
            }
            painter.circle_filled(pos, 3.0, color);
            previous = Some(pos);
        }
    }

    draw_category_labels(&painter, plot, chart);
    attach_tooltip(response, plot, chart);
}

// -----------------------------------------------------------------------
// Radar
// -----------------------------------------------------------------------

/// Radar over the chart's points, one axis per point, first series as the
/// polygon. Needs at least three axes.
pub(crate) fn draw_radar(ui: &mut egui::Ui, chart: &ChartData, size: f32) {
    let n = chart.points.len();
    if n < 3 {
        draw_no_data(ui, "Not enough axes for a radar chart", size);
        return;
    }
    let Some(series) = chart.spec.series.first() else {
        draw_no_data(ui, "No series to plot", size);
        return;
    };

    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, BACKGROUND);
    let center = rect.center();
    let radius = size * 0.36;
    let domain = chart.value_domain();

    // Rings
    for ring in 1..=4 {
        let t = ring as f32 / 4.0;
        let ring_points: Vec<egui::Pos2> =
            (0..n).map(|i| radar_vertex(center, radius, i, n, t)).collect();
        painter.add(egui::Shape::closed_line(
            ring_points,
            egui::Stroke::new(0.5, GRID),
        ));
    }

    // Spokes and axis labels
    for (i, point) in chart.points.iter().enumerate() {
        let end = radar_vertex(center, radius, i, n, 1.0);
        painter.line_segment([center, end], egui::Stroke::new(0.5, GRID));
        let label_pos = radar_vertex(center, radius + 14.0, i, n, 1.0);
        painter.text(
            label_pos,
            egui::Align2::CENTER_CENTER,
            point.label(&chart.spec.category_key),
            small_font(),
            AXIS_TEXT,
        );
    }

    // Data polygon; missing values sit at the center.
    let color = color32(series.color);
    let vertices: Vec<egui::Pos2> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let t = point
                .number(&series.key)
                .map(|v| domain.normalize(v) as f32)
                .unwrap_or(0.0);
            radar_vertex(center, radius, i, n, t)
        })
        .collect();

    let fill = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 50);
    for i in 0..n {
        let next = vertices[(i + 1) % n];
        painter.add(egui::Shape::convex_polygon(
            vec![center, vertices[i], next],
            fill,
            egui::Stroke::NONE,
        ));
    }
    painter.add(egui::Shape::closed_line(
        vertices.clone(),
        egui::Stroke::new(2.0, color),
    ));
    for v in &vertices {
        painter.circle_filled(*v, 3.0, color);
    }
}

// -----------------------------------------------------------------------
// Legend / placeholders
// -----------------------------------------------------------------------

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}

pub(crate) fn draw_legend(ui: &mut egui::Ui, series: &[SeriesSpec]) {
    ui.horizontal_wrapped(|ui| {
        for s in series {
            legend_item(ui, color32(s.color), &s.label);
        }
    });
}

/// Grey box with a centered message, the size of the chart it replaces.
pub(crate) fn draw_no_data(ui: &mut egui::Ui, reason: &str, height: f32) {
    let width = ui.available_width().max(120.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, BACKGROUND);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        reason,
        egui::FontId::proportional(13.0),
        AXIS_TEXT,
    );
}
