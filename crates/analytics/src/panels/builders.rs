//! Pure builders: (store, datasets, selection) -> chart data per panel.

use crate::chart_spec::{AxisDomain, ChartData, ChartKind, ChartSpec, SeriesColor, SeriesSpec};
use crate::ethnic::{rows_by_year, EthnicDistributionRow, ETHNIC_GROUPS};
use crate::filter::{favorites, filter_by_category_year, series_by_name};
use crate::kpi::{KpiCategory, KpiRecord};
use crate::ods::{ods_averages, ods_label, Project, ODS_MAX_LEVEL};
use crate::shape::{
    shape_records, ChartValue, FieldMapping, ETHNIC_SHARES, KEY_VALUE, PROJECT_SCORE,
    TARGET_VS_ACTUAL,
};

use super::PanelData;

/// KPI name of the racial-equity index series.
pub const IEER_KPI_NAME: &str = "IEER";

const IEER_BY_YEAR: &FieldMapping<'static> = &[
    ("year", "year"),
    ("actual_value", "ieer"),
    ("target_value", "target"),
];

/// Grouped bars of target and actual for the selected category and year.
pub fn kpi_overview(records: &[KpiRecord], category: KpiCategory, year: i32) -> PanelData {
    let filtered = filter_by_category_year(records, category, year);
    if filtered.is_empty() {
        return PanelData::no_data(format!(
            "No {} KPIs reported for {year}",
            category.label()
        ));
    }
    let spec = ChartSpec::new(
        &format!("{} KPIs: target vs actual ({year})", category.label()),
        ChartKind::GroupedBar,
        "name",
    )
    .with_series(SeriesSpec::new("target", "Target", SeriesColor::GRAY))
    .with_series(SeriesSpec::new("actual", "Actual", SeriesColor::GREEN));
    PanelData::Ready(ChartData {
        spec,
        points: shape_records(&filtered, TARGET_VS_ACTUAL),
    })
}

/// One stacked bar per year, one segment per ethnic group.
pub fn ethnic_diversity(rows: &[EthnicDistributionRow]) -> PanelData {
    if rows.is_empty() {
        return PanelData::no_data("No workforce composition data");
    }
    let (sorted, _) = rows_by_year(rows);
    let spec = ETHNIC_GROUPS.iter().enumerate().fold(
        ChartSpec::new("Workforce ethnic composition (%)", ChartKind::StackedBar, "year")
            .with_domain(AxisDomain::PERCENT),
        |spec, (i, group)| {
            spec.with_series(SeriesSpec::new(group, group, SeriesColor::palette(i)).stacked("share"))
        },
    );
    PanelData::Ready(ChartData {
        spec,
        points: shape_records(&sorted, ETHNIC_SHARES),
    })
}

/// IEER actual and target per year, on a fixed [0, 1] axis.
pub fn ieer_by_year(records: &[KpiRecord]) -> PanelData {
    let series = series_by_name(records, IEER_KPI_NAME);
    if series.is_empty() {
        return PanelData::no_data("No IEER values reported");
    }
    let spec = ChartSpec::new("IEER by year", ChartKind::Line, "year")
        .with_series(SeriesSpec::new("ieer", "IEER", SeriesColor::TEAL))
        .with_series(SeriesSpec::new("target", "Target", SeriesColor::GRAY))
        .with_domain(AxisDomain::UNIT);
    PanelData::Ready(ChartData {
        spec,
        points: shape_records(&series, IEER_BY_YEAR),
    })
}

/// Mean contribution level per goal across all projects.
pub fn ods_radar(projects: &[Project]) -> PanelData {
    if projects.is_empty() {
        return PanelData::no_data("No projects rated against the ODS");
    }
    let averages = ods_averages(projects);
    let mut points = shape_records(&averages, KEY_VALUE);
    for point in &mut points {
        let label = ods_label(&point.label("name"));
        point.fields.insert("label".to_string(), ChartValue::Text(label));
    }
    let spec = ChartSpec::new("Average ODS contribution", ChartKind::Radar, "label")
        .with_series(SeriesSpec::new("value", "Average level", SeriesColor::BLUE))
        .with_domain(AxisDomain::new(0.0, ODS_MAX_LEVEL));
    PanelData::Ready(ChartData { spec, points })
}

/// Per-project ODS score, 0-100.
pub fn project_scores(projects: &[Project]) -> PanelData {
    if projects.is_empty() {
        return PanelData::no_data("No projects rated against the ODS");
    }
    let spec = ChartSpec::new("Project ODS score", ChartKind::GroupedBar, "name")
        .with_series(SeriesSpec::new("score", "Score", SeriesColor::PURPLE))
        .with_domain(AxisDomain::PERCENT);
    PanelData::Ready(ChartData {
        spec,
        points: shape_records(projects, PROJECT_SCORE),
    })
}

/// Favourite records, cloned for the table.
pub fn favorite_rows(records: &[KpiRecord]) -> Vec<KpiRecord> {
    favorites(records).into_iter().cloned().collect()
}
