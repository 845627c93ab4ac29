//! Shape-adapter stage: maps typed records onto the flat key/value points a
//! chart consumes.
//!
//! A mapping is a static `(source field, output key)` table. Output order and
//! length always match the input; a source field the record does not have
//! leaves the output key absent, which the renderer draws as a gap.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::{KeyAverage, MetricSource};
use crate::ethnic::EthnicDistributionRow;
use crate::kpi::KpiRecord;
use crate::ods::{project_ods_score, Project};

/// One cell of a chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartValue {
    Number(f64),
    Text(String),
}

impl ChartValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ChartValue::Number(v) => Some(*v),
            ChartValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ChartValue::Text(s) => Some(s.as_str()),
            ChartValue::Number(_) => None,
        }
    }
}

/// A flat record handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSeriesPoint {
    pub fields: BTreeMap<String, ChartValue>,
}

impl ChartSeriesPoint {
    pub fn get(&self, key: &str) -> Option<&ChartValue> {
        self.fields.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ChartValue::as_number)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ChartValue::as_text)
    }

    /// Display label for the category axis: text as-is, numbers without a
    /// fractional part printed as integers (years).
    pub fn label(&self, key: &str) -> String {
        match self.get(key) {
            Some(ChartValue::Text(s)) => s.clone(),
            Some(ChartValue::Number(v)) if v.fract() == 0.0 => format!("{v:.0}"),
            Some(ChartValue::Number(v)) => format!("{v}"),
            None => String::new(),
        }
    }
}

/// Named field access used by the shape adapter.
pub trait FieldSource {
    fn field(&self, key: &str) -> Option<ChartValue>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, key: &str) -> Option<ChartValue> {
        (**self).field(key)
    }
}

/// `(source field, output key)` pairs.
pub type FieldMapping<'a> = [(&'a str, &'a str)];

/// KPI name with its target and actual values.
pub const TARGET_VS_ACTUAL: &FieldMapping<'static> = &[
    ("name", "name"),
    ("target_value", "target"),
    ("actual_value", "actual"),
];

/// Per-project ODS score.
pub const PROJECT_SCORE: &FieldMapping<'static> = &[("name", "name"), ("score", "score")];

/// Aggregated key/value pairs (radar axes).
pub const KEY_VALUE: &FieldMapping<'static> = &[("key", "name"), ("value", "value")];

/// Ethnic composition row: year plus one key per group.
pub const ETHNIC_SHARES: &FieldMapping<'static> = &[
    ("year", "year"),
    ("Branca", "Branca"),
    ("Preta", "Preta"),
    ("Parda", "Parda"),
    ("Amarela", "Amarela"),
    ("Indígena", "Indígena"),
];

/// Year on the category axis, the record's actual value under `metric`.
pub fn year_series(metric: &str) -> [(&str, &str); 2] {
    [("year", "year"), ("actual_value", metric)]
}

/// Maps every record through `mapping`, preserving order and length.
pub fn shape_records<R: FieldSource>(
    records: &[R],
    mapping: &FieldMapping<'_>,
) -> Vec<ChartSeriesPoint> {
    records
        .iter()
        .map(|record| {
            let fields = mapping
                .iter()
                .filter_map(|(source, target)| {
                    record.field(source).map(|value| (target.to_string(), value))
                })
                .collect();
            ChartSeriesPoint { fields }
        })
        .collect()
}

impl FieldSource for KpiRecord {
    fn field(&self, key: &str) -> Option<ChartValue> {
        let text = |s: &str| Some(ChartValue::Text(s.to_string()));
        match key {
            "id" => Some(ChartValue::Number(self.id as f64)),
            "name" => text(self.name.as_str()),
            "category" => text(self.category.as_str()),
            "year" => Some(ChartValue::Number(self.year as f64)),
            "target_value" => Some(ChartValue::Number(self.target_value)),
            "actual_value" => Some(ChartValue::Number(self.actual_value)),
            "unit" => text(self.unit.as_str()),
            "description" => text(self.description.as_str()),
            "frequency" => text(self.frequency.as_str()),
            "collection_method" => text(self.collection_method.as_str()),
            "status" => text(self.status.as_str()),
            "companhia" => text(self.companhia.as_str()),
            "setor" => text(self.setor.as_str()),
            _ => None,
        }
    }
}

impl FieldSource for EthnicDistributionRow {
    fn field(&self, key: &str) -> Option<ChartValue> {
        if key == "year" {
            return Some(ChartValue::Number(self.year as f64));
        }
        self.share(key).map(ChartValue::Number)
    }
}

impl FieldSource for KeyAverage {
    fn field(&self, key: &str) -> Option<ChartValue> {
        match key {
            "key" => Some(ChartValue::Text(self.key.clone())),
            "value" => Some(ChartValue::Number(self.value)),
            _ => None,
        }
    }
}

impl FieldSource for Project {
    fn field(&self, key: &str) -> Option<ChartValue> {
        match key {
            "name" => Some(ChartValue::Text(self.name.clone())),
            "score" => Some(ChartValue::Number(project_ods_score(self))),
            other => self.metric(other).map(ChartValue::Number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_by_category_year;
    use crate::kpi::KpiCategory;
    use crate::sample_data::{sample_ethnic_distribution, sample_kpis};

    #[test]
    fn test_target_vs_actual_matches_records() {
        let kpis = sample_kpis();
        let filtered = filter_by_category_year(&kpis, KpiCategory::Environment, 2023);
        let points = shape_records(&filtered, TARGET_VS_ACTUAL);
        assert_eq!(points.len(), filtered.len());
        for (point, record) in points.iter().zip(&filtered) {
            assert_eq!(point.text("name"), Some(record.name.as_str()));
            assert_eq!(point.number("target"), Some(record.target_value));
            assert_eq!(point.number("actual"), Some(record.actual_value));
            assert_eq!(point.fields.len(), 3);
        }
    }

    #[test]
    fn test_shape_preserves_order_and_length() {
        let kpis = sample_kpis();
        let points = shape_records(&kpis, &year_series("value"));
        assert_eq!(points.len(), kpis.len());
        for (point, record) in points.iter().zip(&kpis) {
            assert_eq!(point.number("year"), Some(record.year as f64));
            assert_eq!(point.number("value"), Some(record.actual_value));
        }
    }

    #[test]
    fn test_missing_source_key_is_absent_not_dropped() {
        let rows = vec![
            EthnicDistributionRow::from_shares(2020, &[70.0, 30.0]),
            EthnicDistributionRow::from_shares(2021, &[50.0, 20.0, 30.0]),
        ];
        let mapping = [("year", "year"), ("Parda", "parda")];
        let points = shape_records(&rows, &mapping);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].number("parda"), None);
        assert_eq!(points[1].number("parda"), Some(30.0));
    }

    #[test]
    fn test_unknown_source_key_is_absent() {
        let kpis = sample_kpis();
        let points = shape_records(&kpis[..1], &[("no_such_field", "x"), ("name", "name")]);
        assert!(points[0].get("x").is_none());
        assert!(points[0].get("name").is_some());
    }

    #[test]
    fn test_point_serializes_flat() {
        let rows = sample_ethnic_distribution();
        let points = shape_records(&rows[..1], &[("year", "year"), ("Preta", "preta")]);
        let json = serde_json::to_value(&points[0]).expect("serialize");
        assert_eq!(json["year"], serde_json::json!(2020.0));
        assert_eq!(json["preta"], serde_json::json!(9.1));
    }

    #[test]
    fn test_label_prints_years_without_fraction() {
        let kpis = sample_kpis();
        let points = shape_records(&kpis[..1], &year_series("v"));
        assert_eq!(points[0].label("year"), "2023");
        assert_eq!(points[0].label("missing"), "");
    }
}
