//! Tests for panel builders.

use super::builders::*;
use super::*;
use crate::chart_spec::{AxisDomain, ChartKind};
use crate::ethnic::EthnicDistributionRow;
use crate::ods::ODS_COUNT;
use crate::sample_data::{sample_kpis, sample_projects};

fn ready(panel: &PanelData) -> &ChartData {
    match panel.chart() {
        Some(chart) => chart,
        None => panic!("expected chart, got {panel:?}"),
    }
}

#[test]
fn test_kpi_overview_environment_2023() {
    let kpis = sample_kpis();
    let panel = kpi_overview(&kpis, KpiCategory::Environment, 2023);
    let chart = ready(&panel);
    assert_eq!(chart.spec.kind, ChartKind::GroupedBar);
    assert_eq!(chart.points.len(), 6);
    let names: Vec<String> = chart.points.iter().map(|p| p.label("name")).collect();
    let expected: Vec<String> = kpis
        .iter()
        .filter(|k| [1, 2, 8, 21, 22, 28].contains(&k.id) && k.year == 2023)
        .map(|k| k.name.clone())
        .collect();
    assert_eq!(names, expected);
    let keys: Vec<&str> = chart.spec.series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["target", "actual"]);
}

#[test]
fn test_kpi_overview_without_matches_is_no_data() {
    let kpis = sample_kpis();
    let panel = kpi_overview(&kpis, KpiCategory::Environment, 1999);
    match panel {
        PanelData::NoData { reason } => assert!(reason.contains("1999"), "got: {reason}"),
        other => panic!("expected no data, got {other:?}"),
    }
}

#[test]
fn test_ethnic_panel_sorted_and_stacked() {
    let rows = vec![
        EthnicDistributionRow::from_shares(2022, &[50.0, 10.0, 35.0, 3.0, 2.0]),
        EthnicDistributionRow::from_shares(2021, &[60.0, 10.0, 25.0, 3.0, 2.0]),
    ];
    let panel = ethnic_diversity(&rows);
    let chart = ready(&panel);
    assert_eq!(chart.spec.kind, ChartKind::StackedBar);
    assert_eq!(chart.spec.y_domain, Some(AxisDomain::PERCENT));
    assert_eq!(chart.spec.series.len(), 5);
    assert!(chart
        .spec
        .series
        .iter()
        .all(|s| s.stack.as_deref() == Some("share")));
    assert_eq!(chart.points[0].number("year"), Some(2021.0));
    assert_eq!(chart.points[1].number("Branca"), Some(50.0));
}

#[test]
fn test_ethnic_panel_keeps_inconsistent_rows() {
    let rows = vec![EthnicDistributionRow::from_shares(2020, &[40.0, 10.0])];
    let chart = ready(&ethnic_diversity(&rows)).clone();
    assert_eq!(chart.points.len(), 1);
    assert_eq!(chart.points[0].number("Parda"), None);
}

#[test]
fn test_ieer_panel_uses_unit_domain() {
    let kpis = sample_kpis();
    let panel = ieer_by_year(&kpis);
    let chart = ready(&panel);
    assert_eq!(chart.spec.kind, ChartKind::Line);
    assert_eq!(chart.spec.y_domain, Some(AxisDomain::UNIT));
    let years: Vec<f64> = chart.points.iter().filter_map(|p| p.number("year")).collect();
    assert_eq!(years, vec![2020.0, 2021.0, 2022.0, 2023.0]);
    assert!(chart
        .points
        .iter()
        .filter_map(|p| p.number("ieer"))
        .all(|v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_ieer_panel_without_series_is_no_data() {
    let kpis: Vec<KpiRecord> = sample_kpis()
        .into_iter()
        .filter(|k| k.name != IEER_KPI_NAME)
        .collect();
    assert!(ieer_by_year(&kpis).chart().is_none());
}

#[test]
fn test_ods_radar_has_seventeen_labelled_axes() {
    let projects = sample_projects();
    let panel = ods_radar(&projects);
    let chart = ready(&panel);
    assert_eq!(chart.spec.kind, ChartKind::Radar);
    assert_eq!(chart.points.len(), ODS_COUNT);
    assert_eq!(chart.points[0].text("label"), Some("ODS 1"));
    assert_eq!(chart.points[16].text("label"), Some("ODS 17"));
    for point in &chart.points {
        let value = point.number("value").unwrap_or(-1.0);
        assert!((0.0..=2.0).contains(&value), "got {value}");
    }
}

#[test]
fn test_project_scores_bounded() {
    let projects = sample_projects();
    let panel = project_scores(&projects);
    let chart = ready(&panel);
    assert_eq!(chart.points.len(), projects.len());
    for point in &chart.points {
        let score = point.number("score").unwrap_or(-1.0);
        assert!((0.0..=100.0).contains(&score), "got {score}");
    }
}

#[test]
fn test_empty_projects_are_no_data() {
    assert!(ods_radar(&[]).chart().is_none());
    assert!(project_scores(&[]).chart().is_none());
}

#[test]
fn test_favorite_rows_in_order() {
    let kpis = sample_kpis();
    let ids: Vec<i64> = favorite_rows(&kpis).iter().map(|k| k.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 7, 17, 28]);
}

#[test]
fn test_build_panels_lists_years_for_category() {
    let kpis = sample_kpis();
    let selection = DashboardSelection {
        category: KpiCategory::Social,
        year: 2023,
    };
    let panels = build_panels(&kpis, &ImpactData::default(), &selection);
    assert_eq!(panels.years, vec![2020, 2021, 2022, 2023]);
    assert!(panels.kpi_overview.chart().is_some());
}

#[test]
fn test_snapped_year() {
    let selection = DashboardSelection::default();
    assert_eq!(selection.snapped_year(&[2022, 2023]), None);
    assert_eq!(selection.snapped_year(&[2020, 2021]), Some(2021));
    assert_eq!(selection.snapped_year(&[]), None);
}
