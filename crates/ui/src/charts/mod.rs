//! Generic renderer for [`ChartData`]: picks the painter routine from the
//! chart kind and handles the no-data state.

mod drawing;
mod layout;


use analytics::chart_spec::{ChartData, ChartKind};
use analytics::panels::PanelData;
use bevy_egui::egui;

const CHART_HEIGHT: f32 = 220.0;
const RADAR_SIZE: f32 = 300.0;

/// Title, chart and legend for one panel, or its no-data placeholder.
pub(crate) fn show_panel(ui: &mut egui::Ui, panel: &PanelData) {
    match panel {
        PanelData::Ready(chart) => show_chart(ui, chart),
        PanelData::NoData { reason } => drawing::draw_no_data(ui, reason, CHART_HEIGHT / 2.0),
    }
}

pub(crate) fn show_chart(ui: &mut egui::Ui, chart: &ChartData) {
    ui.strong(chart.spec.title.as_str());
    if chart.points.is_empty() {
        drawing::draw_no_data(ui, "No data", CHART_HEIGHT / 2.0);
        return;
    }
    let width = ui.available_width().max(240.0);
    match chart.spec.kind {
        ChartKind::GroupedBar => drawing::draw_grouped_bars(ui, chart, width, CHART_HEIGHT),
        ChartKind::StackedBar => drawing::draw_stacked_bars(ui, chart, width, CHART_HEIGHT),
        ChartKind::Line => drawing::draw_line_chart(ui, chart, width, CHART_HEIGHT),
        ChartKind::Radar => drawing::draw_radar(ui, chart, RADAR_SIZE.min(width)),
    }
    drawing::draw_legend(ui, &chart.spec.series);
}
