//! KPI panel window and its fetch coupling.

use analytics::config::DashboardConfig;
use analytics::fetch::{CancelKpiFetch, KpiFetchLifecycle, RequestKpiFetch};
use analytics::panels::{DashboardPanels, DashboardSelection};
use analytics::store::KpiStore;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::sections;
use super::types::{fetch_status, KpiPanelVisible};
use crate::charts;

/// Displays the KPI panel window.
#[allow(clippy::too_many_arguments)]
pub fn kpi_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<KpiPanelVisible>,
    mut selection: ResMut<DashboardSelection>,
    panels: Res<DashboardPanels>,
    lifecycle: Res<KpiFetchLifecycle>,
    store: Res<KpiStore>,
    config: Res<DashboardConfig>,
    mut requests: EventWriter<RequestKpiFetch>,
) {
    if !visible.0 {
        return;
    }

    let (status, status_color) = fetch_status(
        lifecycle.state(),
        store.source(),
        config.api_base_url().is_some(),
    );
    let can_reload = config.api_base_url().is_some() && !lifecycle.is_pending();

    let mut next = *selection;
    let mut reload = false;
    let mut open = true;
    egui::Window::new("ESG KPIs")
        .open(&mut open)
        .default_width(560.0)
        .default_pos([12.0, 12.0])
        .show(contexts.ctx_mut(), |ui| {
            ui.small("Press [K] to toggle");
            reload = sections::render_fetch_status(ui, &status, status_color, can_reload);
            ui.separator();

            sections::render_selectors(ui, &mut next, &panels.years);
            ui.add_space(4.0);
            charts::show_panel(ui, &panels.kpi_overview);

            ui.add_space(4.0);
            ui.separator();

            sections::render_favorites(ui, &panels.favorites);
        });

    // Only write back on change so the panels are not rebuilt every frame.
    selection.set_if_neq(next);
    if reload {
        requests.send(RequestKpiFetch);
    }
    if !open {
        visible.0 = false;
    }
}

/// Closing the KPI panel abandons its pending request.
pub fn cancel_fetch_when_hidden(
    visible: Res<KpiPanelVisible>,
    lifecycle: Res<KpiFetchLifecycle>,
    mut cancels: EventWriter<CancelKpiFetch>,
) {
    if visible.is_changed() && !visible.0 && lifecycle.is_pending() {
        cancels.send(CancelKpiFetch);
    }
}
