//! Dashboard panels: the current selection and the chart data derived from
//! it. Everything here is recomputed from the store, never edited in place.

pub mod builders;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::chart_spec::ChartData;
use crate::config::DEFAULT_REPORTING_YEAR;
use crate::filter::available_years;
use crate::kpi::{KpiCategory, KpiRecord};
use crate::store::{ImpactData, KpiStore};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Category and year chosen in the KPI panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSelection {
    pub category: KpiCategory,
    pub year: i32,
}

impl Default for DashboardSelection {
    fn default() -> Self {
        Self {
            category: KpiCategory::Environment,
            year: DEFAULT_REPORTING_YEAR,
        }
    }
}

impl DashboardSelection {
    /// Year to select so the panel has data: the current one when present in
    /// `years`, otherwise the latest. `None` when nothing needs to change.
    pub fn snapped_year(&self, years: &[i32]) -> Option<i32> {
        if years.is_empty() || years.contains(&self.year) {
            return None;
        }
        years.last().copied()
    }
}

/// What one panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Ready(ChartData),
    NoData { reason: String },
}

impl PanelData {
    pub fn no_data(reason: impl Into<String>) -> Self {
        PanelData::NoData {
            reason: reason.into(),
        }
    }

    pub fn chart(&self) -> Option<&ChartData> {
        match self {
            PanelData::Ready(chart) => Some(chart),
            PanelData::NoData { .. } => None,
        }
    }
}

impl Default for PanelData {
    fn default() -> Self {
        PanelData::no_data("Loading")
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DashboardPanels {
    pub kpi_overview: PanelData,
    pub ethnic_diversity: PanelData,
    pub ieer: PanelData,
    pub ods_radar: PanelData,
    pub project_scores: PanelData,
    pub favorites: Vec<KpiRecord>,
    /// Years with data for the selected category (year selector options).
    pub years: Vec<i32>,
    /// Number of rebuilds so far.
    pub rebuilds: u64,
}

/// Builds every panel for `selection`.
pub fn build_panels(
    records: &[KpiRecord],
    impact: &ImpactData,
    selection: &DashboardSelection,
) -> DashboardPanels {
    DashboardPanels {
        kpi_overview: builders::kpi_overview(records, selection.category, selection.year),
        ethnic_diversity: builders::ethnic_diversity(&impact.ethnic_distribution),
        ieer: builders::ieer_by_year(records),
        ods_radar: builders::ods_radar(&impact.projects),
        project_scores: builders::project_scores(&impact.projects),
        favorites: builders::favorite_rows(records),
        years: available_years(records, selection.category),
        rebuilds: 0,
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Moves the selected year onto one that has data after the store or the
/// category changes. Only writes when the year actually moves.
pub fn snap_selection_year(store: Res<KpiStore>, mut selection: ResMut<DashboardSelection>) {
    if !(store.is_changed() || selection.is_changed()) {
        return;
    }
    let years = available_years(store.records(), selection.category);
    if let Some(year) = selection.snapped_year(&years) {
        debug!(
            "No {} KPIs for {}; selecting {year}",
            selection.category.label(),
            selection.year
        );
        selection.year = year;
    }
}

pub fn refresh_dashboard_panels(
    selection: Res<DashboardSelection>,
    store: Res<KpiStore>,
    impact: Res<ImpactData>,
    mut panels: ResMut<DashboardPanels>,
) {
    if !(selection.is_changed() || store.is_changed() || impact.is_changed()) {
        return;
    }
    if impact.is_changed() {
        for row in impact
            .ethnic_distribution
            .iter()
            .filter(|row| !row.sums_to_hundred())
        {
            warn!(
                "Ethnic composition for {} sums to {:.1}%, not 100%",
                row.year,
                row.total_share()
            );
        }
    }
    let rebuilds = panels.rebuilds + 1;
    *panels = build_panels(store.records(), &impact, &selection);
    panels.rebuilds = rebuilds;
}
