//! KPI record model.
//!
//! A [`KpiRecord`] is one measured indicator for one reporting period. The
//! numeric `id` carried by source data is not unique, so records are keyed by
//! [`KpiKey`] (name, year, category) wherever identity matters.

use serde::{Deserialize, Serialize};

/// Top-level ESG category of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiCategory {
    Environment,
    Social,
    Governance,
}

impl KpiCategory {
    pub const ALL: [KpiCategory; 3] = [
        KpiCategory::Environment,
        KpiCategory::Social,
        KpiCategory::Governance,
    ];

    /// Wire name, as used by the KPI API.
    pub fn as_str(self) -> &'static str {
        match self {
            KpiCategory::Environment => "environment",
            KpiCategory::Social => "social",
            KpiCategory::Governance => "governance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KpiCategory::Environment => "Environmental",
            KpiCategory::Social => "Social",
            KpiCategory::Governance => "Governance",
        }
    }

    /// Parses a wire name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

/// One measured indicator for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRecord {
    pub id: i64,
    pub name: String,
    pub category: KpiCategory,
    pub year: i32,
    #[serde(default)]
    pub target_value: f64,
    #[serde(default)]
    pub actual_value: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub collection_method: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub companhia: String,
    #[serde(default)]
    pub setor: String,
}

impl KpiRecord {
    pub fn key(&self) -> KpiKey {
        KpiKey {
            name: self.name.clone(),
            year: self.year,
            category: self.category,
        }
    }

    /// Actual value as a fraction of target. `None` when the target is zero.
    pub fn attainment(&self) -> Option<f64> {
        if self.target_value == 0.0 {
            return None;
        }
        Some(self.actual_value / self.target_value)
    }
}

/// Composite identity of a KPI record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KpiKey {
    pub name: String,
    pub year: i32,
    pub category: KpiCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(KpiCategory::parse(" Social "), Some(KpiCategory::Social));
        assert_eq!(
            KpiCategory::parse("ENVIRONMENT"),
            Some(KpiCategory::Environment)
        );
        assert_eq!(KpiCategory::parse("finance"), None);
    }

    #[test]
    fn test_category_serde_uses_lowercase() {
        let json = serde_json::to_string(&KpiCategory::Governance).expect("serialize");
        assert_eq!(json, "\"governance\"");
        let back: KpiCategory = serde_json::from_str("\"environment\"").expect("deserialize");
        assert_eq!(back, KpiCategory::Environment);
    }

    #[test]
    fn test_record_missing_optional_fields_default() {
        let json = r#"{"id": 7, "name": "Turnover", "category": "social", "year": 2022}"#;
        let record: KpiRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(record.target_value, 0.0);
        assert_eq!(record.actual_value, 0.0);
        assert!(record.companhia.is_empty());
        assert!(!record.is_favorite);
    }

    #[test]
    fn test_attainment_guards_zero_target() {
        let json = r#"{"id": 1, "name": "x", "category": "social", "year": 2023,
                       "target_value": 0, "actual_value": 5}"#;
        let mut record: KpiRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(record.attainment(), None);
        record.target_value = 10.0;
        assert!((record.attainment().unwrap() - 0.5).abs() < f64::EPSILON);
    }
}
