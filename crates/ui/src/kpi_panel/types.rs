//! Types and status formatting for the KPI panel.

use analytics::fetch::FetchState;
use analytics::store::KpiSource;
use bevy::prelude::*;
use bevy_egui::egui;

/// Whether the KPI panel window is open. Toggle with 'K'.
#[derive(Resource)]
pub struct KpiPanelVisible(pub bool);

impl Default for KpiPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub(crate) const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(80, 220, 80);
pub(crate) const STATUS_PENDING: egui::Color32 = egui::Color32::from_rgb(220, 180, 50);
pub(crate) const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(255, 60, 60);
pub(crate) const STATUS_NEUTRAL: egui::Color32 = egui::Color32::from_gray(170);

/// One-line description of where the shown data comes from.
pub(crate) fn fetch_status(
    state: &FetchState,
    source: KpiSource,
    api_configured: bool,
) -> (String, egui::Color32) {
    match state {
        FetchState::Pending { .. } => ("Loading KPI entries...".to_string(), STATUS_PENDING),
        FetchState::Loaded { count, .. } => (format!("Loaded {count} KPI entries"), STATUS_OK),
        FetchState::Failed { error, .. } => {
            let fallback = match source {
                KpiSource::Sample => "showing sample data",
                KpiSource::Remote => "showing last loaded data",
            };
            (format!("{error} ({fallback})"), STATUS_ERROR)
        }
        FetchState::Idle => match (source, api_configured) {
            (KpiSource::Remote, _) => ("Live data".to_string(), STATUS_OK),
            (KpiSource::Sample, true) => ("Sample data".to_string(), STATUS_NEUTRAL),
            (KpiSource::Sample, false) => (
                "Sample data (no KPI API configured)".to_string(),
                STATUS_NEUTRAL,
            ),
        },
    }
}

/// Attainment as a percentage string, or a dash when the target is zero.
pub(crate) fn attainment_text(attainment: Option<f64>) -> String {
    match attainment {
        Some(ratio) => format!("{:.0}%", ratio * 100.0),
        None => "-".to_string(),
    }
}
