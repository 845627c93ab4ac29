//! Tests for the analytics panel.

use analytics::chart_spec::ChartKind;
use analytics::panels::build_panels;
use analytics::panels::DashboardSelection;
use analytics::sample_data::sample_kpis;
use analytics::store::ImpactData;

use super::*;

#[test]
fn test_analytics_panel_visible_by_default() {
    assert!(AnalyticsPanelVisible::default().0);
}

#[test]
fn test_default_tab_is_diversity() {
    assert_eq!(AnalyticsPanelState::default().tab, AnalyticsTab::Diversity);
}

#[test]
fn test_tab_labels_unique() {
    let labels: Vec<&str> = AnalyticsTab::ALL.iter().map(|t| t.label()).collect();
    for (i, a) in labels.iter().enumerate() {
        assert!(!labels[i + 1..].contains(a), "duplicate tab label {a}");
    }
}

#[test]
fn test_each_tab_maps_to_expected_chart_kind() {
    let panels = build_panels(
        &sample_kpis(),
        &ImpactData::default(),
        &DashboardSelection::default(),
    );
    let kind = |tab: AnalyticsTab| tab.panel(&panels).chart().map(|c| c.spec.kind);
    assert_eq!(kind(AnalyticsTab::Diversity), Some(ChartKind::StackedBar));
    assert_eq!(kind(AnalyticsTab::Ieer), Some(ChartKind::Line));
    assert_eq!(kind(AnalyticsTab::OdsRadar), Some(ChartKind::Radar));
    assert_eq!(kind(AnalyticsTab::ProjectScores), Some(ChartKind::GroupedBar));
}
