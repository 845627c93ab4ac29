use analytics::AnalyticsSet;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod analytics_panel;
mod charts;
pub mod keybinds;
pub mod kpi_panel;
pub mod theme;

/// egui windows over the analytics resources. Reads `DashboardPanels`,
/// writes `DashboardSelection` and the fetch request/cancel events.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<kpi_panel::KpiPanelVisible>()
            .init_resource::<analytics_panel::AnalyticsPanelVisible>()
            .init_resource::<analytics_panel::AnalyticsPanelState>()
            .add_systems(Startup, theme::apply_dashboard_theme)
            .add_systems(
                Update,
                (
                    keybinds::dashboard_keybinds,
                    kpi_panel::kpi_panel_ui,
                    analytics_panel::analytics_panel_ui,
                    kpi_panel::cancel_fetch_when_hidden,
                )
                    .chain()
                    .after(AnalyticsSet::Panels),
            );
    }
}
