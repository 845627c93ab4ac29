use analytics::fetch::RequestKpiFetch;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::analytics_panel::AnalyticsPanelVisible;
use crate::kpi_panel::KpiPanelVisible;

/// K = KPI panel, A = analytics panel, R = reload KPI entries.
/// Keys are ignored when egui has keyboard focus.
pub fn dashboard_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut kpi_panel: ResMut<KpiPanelVisible>,
    mut analytics_panel: ResMut<AnalyticsPanelVisible>,
    mut requests: EventWriter<RequestKpiFetch>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyK) {
        kpi_panel.0 = !kpi_panel.0;
    }
    if keyboard.just_pressed(KeyCode::KeyA) {
        analytics_panel.0 = !analytics_panel.0;
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        requests.send(RequestKpiFetch);
    }
}
