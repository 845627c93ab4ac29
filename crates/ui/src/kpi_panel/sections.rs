//! Section renderers for the KPI panel.

use analytics::kpi::{KpiCategory, KpiRecord};
use analytics::panels::DashboardSelection;
use bevy_egui::egui;

use super::types::attainment_text;

/// Category tabs and year selector. Edits `selection` in place.
pub fn render_selectors(ui: &mut egui::Ui, selection: &mut DashboardSelection, years: &[i32]) {
    ui.horizontal(|ui| {
        for category in KpiCategory::ALL {
            ui.selectable_value(&mut selection.category, category, category.label());
        }
    });

    ui.horizontal(|ui| {
        ui.label("Year:");
        egui::ComboBox::from_id_salt("kpi_year")
            .selected_text(selection.year.to_string())
            .show_ui(ui, |ui| {
                for year in years.iter().rev() {
                    ui.selectable_value(&mut selection.year, *year, year.to_string());
                }
            });
        if years.is_empty() {
            ui.weak("no reported years");
        }
    });
}

/// Status line plus Reload button. Returns true when Reload was clicked.
pub fn render_fetch_status(
    ui: &mut egui::Ui,
    status: &str,
    color: egui::Color32,
    can_reload: bool,
) -> bool {
    let mut reload = false;
    ui.horizontal(|ui| {
        ui.colored_label(color, status);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            reload = ui
                .add_enabled(can_reload, egui::Button::new("Reload"))
                .on_hover_text("Fetch KPI entries again [R]")
                .clicked();
        });
    });
    reload
}

/// Favourite KPIs as a striped table.
pub fn render_favorites(ui: &mut egui::Ui, favorites: &[KpiRecord]) {
    ui.heading("Favourite KPIs");
    if favorites.is_empty() {
        ui.label("No favourite KPIs");
        return;
    }
    egui::Grid::new("favorite_kpis")
        .num_columns(7)
        .striped(true)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for header in ["KPI", "Year", "Target", "Actual", "Unit", "Attained", "Status"] {
                ui.strong(header);
            }
            ui.end_row();

            for kpi in favorites {
                ui.label(kpi.name.as_str());
                ui.label(kpi.year.to_string());
                ui.label(format!("{}", kpi.target_value));
                ui.label(format!("{}", kpi.actual_value));
                ui.label(kpi.unit.as_str());
                ui.label(attainment_text(kpi.attainment()));
                ui.label(kpi.status.as_str());
                ui.end_row();
            }
        });
}
