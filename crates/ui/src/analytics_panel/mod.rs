//! Analytics panel: workforce diversity, IEER trend and ODS project charts,
//! one tab each.

use analytics::panels::{DashboardPanels, PanelData};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::charts;

#[cfg(test)]
mod tests;

/// Whether the analytics panel window is open. Toggle with 'A'.
#[derive(Resource)]
pub struct AnalyticsPanelVisible(pub bool);

impl Default for AnalyticsPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

// -----------------------------------------------------------------------
// Tabs
// -----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AnalyticsTab {
    #[default]
    Diversity,
    Ieer,
    OdsRadar,
    ProjectScores,
}

impl AnalyticsTab {
    pub(crate) const ALL: [AnalyticsTab; 4] = [
        AnalyticsTab::Diversity,
        AnalyticsTab::Ieer,
        AnalyticsTab::OdsRadar,
        AnalyticsTab::ProjectScores,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            AnalyticsTab::Diversity => "Diversity",
            AnalyticsTab::Ieer => "IEER",
            AnalyticsTab::OdsRadar => "ODS",
            AnalyticsTab::ProjectScores => "Projects",
        }
    }

    pub(crate) fn panel(self, panels: &DashboardPanels) -> &PanelData {
        match self {
            AnalyticsTab::Diversity => &panels.ethnic_diversity,
            AnalyticsTab::Ieer => &panels.ieer,
            AnalyticsTab::OdsRadar => &panels.ods_radar,
            AnalyticsTab::ProjectScores => &panels.project_scores,
        }
    }
}

/// Selected tab of the analytics panel.
#[derive(Resource, Default)]
pub struct AnalyticsPanelState {
    tab: AnalyticsTab,
}

// -----------------------------------------------------------------------
// UI system
// -----------------------------------------------------------------------

pub fn analytics_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<AnalyticsPanelVisible>,
    mut state: ResMut<AnalyticsPanelState>,
    panels: Res<DashboardPanels>,
) {
    if !visible.0 {
        return;
    }

    let mut tab = state.tab;
    let mut open = true;
    egui::Window::new("Social & ODS Analytics")
        .open(&mut open)
        .default_width(480.0)
        .default_pos([600.0, 12.0])
        .show(contexts.ctx_mut(), |ui| {
            ui.small("Press [A] to toggle");

            ui.horizontal(|ui| {
                for candidate in AnalyticsTab::ALL {
                    ui.selectable_value(&mut tab, candidate, candidate.label());
                }
            });
            ui.separator();

            charts::show_panel(ui, tab.panel(&panels));
        });

    if tab != state.tab {
        state.tab = tab;
    }
    if !open {
        visible.0 = false;
    }
}
