use bevy::prelude::*;

pub mod aggregate;
pub mod chart_spec;
pub mod config;
pub mod ethnic;
pub mod fetch;
pub mod filter;
pub mod kpi;
pub mod ods;
pub mod panels;
pub mod sample_data;
pub mod shape;
pub mod store;

#[cfg(test)]
mod test_harness;

/// System ordering inside `Update`: outcomes land in the store before the
/// panels are rebuilt from it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnalyticsSet {
    Fetch,
    Panels,
}

/// KPI store, fetch lifecycle and panel assembly. Rendering and transport
/// live in other crates; this plugin runs headless.
pub struct AnalyticsPlugin;

impl Plugin for AnalyticsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<config::DashboardConfig>()
            .init_resource::<store::KpiStore>()
            .init_resource::<store::ImpactData>()
            .init_resource::<panels::DashboardSelection>()
            .init_resource::<panels::DashboardPanels>()
            .init_resource::<fetch::KpiFetchLifecycle>()
            .init_resource::<fetch::KpiFetchBuffer>()
            .add_event::<fetch::RequestKpiFetch>()
            .add_event::<fetch::CancelKpiFetch>()
            .add_event::<fetch::KpiFetchDispatch>()
            .configure_sets(Update, (AnalyticsSet::Fetch, AnalyticsSet::Panels).chain())
            .add_systems(Startup, fetch::request_initial_fetch)
            .add_systems(
                Update,
                (
                    fetch::cancel_requested_fetches,
                    fetch::begin_requested_fetches,
                    fetch::apply_fetch_outcomes,
                    fetch::expire_stalled_fetch,
                    fetch::cancel_fetch_on_exit,
                )
                    .chain()
                    .in_set(AnalyticsSet::Fetch),
            )
            .add_systems(
                Update,
                (
                    panels::snap_selection_year,
                    panels::refresh_dashboard_panels,
                )
                    .chain()
                    .in_set(AnalyticsSet::Panels),
            );
    }
}
