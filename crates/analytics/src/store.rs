//! KPI store: the ordered, in-memory sequence every panel reads from.
//!
//! Source `id`s are not unique, so ingestion keys records by
//! (name, year, category) and reports both kinds of duplicates instead of
//! silently dropping data.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::ethnic::EthnicDistributionRow;
use crate::kpi::{KpiKey, KpiRecord};
use crate::ods::Project;
use crate::sample_data::{sample_ethnic_distribution, sample_kpis, sample_projects};

/// Where the store's current contents came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KpiSource {
    #[default]
    Sample,
    Remote,
}

/// Duplicate findings from one ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    /// Ids carried by more than one accepted record, ascending.
    pub duplicate_ids: Vec<i64>,
    /// Composite keys seen more than once, in first-seen order, with the
    /// number of earlier entries the last occurrence replaced.
    pub replaced_keys: Vec<(KpiKey, usize)>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty() && self.replaced_keys.is_empty()
    }

    /// Total entries dropped because a later one shared their key.
    pub fn discarded_entries(&self) -> usize {
        self.replaced_keys.iter().map(|(_, n)| n).sum()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KpiStore {
    records: Vec<KpiRecord>,
    source: KpiSource,
    /// Bumped on every replacement; lets consumers detect content changes
    /// without comparing records.
    revision: u64,
}

impl Default for KpiStore {
    fn default() -> Self {
        let mut store = Self {
            records: Vec::new(),
            source: KpiSource::Sample,
            revision: 0,
        };
        store.replace(sample_kpis(), KpiSource::Sample);
        store
    }
}

impl KpiStore {
    pub fn records(&self) -> &[KpiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> KpiSource {
        self.source
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, key: &KpiKey) -> Option<&KpiRecord> {
        self.records.iter().find(|r| {
            r.year == key.year && r.category == key.category && r.name == key.name
        })
    }

    /// Replaces the contents with `records`, keeping input order.
    ///
    /// When two records share a composite key the later one wins but takes
    /// the position of the first, so chart ordering stays stable.
    pub fn replace(&mut self, records: Vec<KpiRecord>, source: KpiSource) -> IngestReport {
        let mut report = IngestReport::default();
        let mut positions: HashMap<KpiKey, usize> = HashMap::with_capacity(records.len());
        let mut kept: Vec<KpiRecord> = Vec::with_capacity(records.len());
        let mut replaced_at: HashMap<KpiKey, usize> = HashMap::new();

        for record in records {
            let key = record.key();
            match positions.get(&key) {
                Some(&index) => {
                    kept[index] = record;
                    match replaced_at.get(&key) {
                        Some(&slot) => report.replaced_keys[slot].1 += 1,
                        None => {
                            replaced_at.insert(key.clone(), report.replaced_keys.len());
                            report.replaced_keys.push((key, 1));
                        }
                    }
                }
                None => {
                    positions.insert(key, kept.len());
                    kept.push(record);
                }
            }
        }

        let mut seen = HashSet::new();
        let mut duplicates = HashSet::new();
        for record in &kept {
            if !seen.insert(record.id) {
                duplicates.insert(record.id);
            }
        }
        report.duplicate_ids = duplicates.into_iter().collect();
        report.duplicate_ids.sort_unstable();
        report.accepted = kept.len();

        self.records = kept;
        self.source = source;
        self.revision += 1;
        report
    }
}

/// Datasets that are not KPI entries: the yearly ethnic composition and the
/// ODS-rated projects. The API does not serve them, so they always come from
/// the compiled-in sample.
#[derive(Resource, Debug, Clone)]
pub struct ImpactData {
    pub ethnic_distribution: Vec<EthnicDistributionRow>,
    pub projects: Vec<Project>,
}

impl Default for ImpactData {
    fn default() -> Self {
        Self {
            ethnic_distribution: sample_ethnic_distribution(),
            projects: sample_projects(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::KpiCategory;

    fn record(id: i64, name: &str, year: i32, actual: f64) -> KpiRecord {
        KpiRecord {
            id,
            name: name.to_string(),
            category: KpiCategory::Social,
            year,
            target_value: 10.0,
            actual_value: actual,
            unit: "%".to_string(),
            description: String::new(),
            frequency: String::new(),
            collection_method: String::new(),
            status: String::new(),
            is_favorite: false,
            companhia: String::new(),
            setor: String::new(),
        }
    }

    #[test]
    fn test_default_store_holds_sample_and_reports_id_forty() {
        let mut store = KpiStore::default();
        assert_eq!(store.source(), KpiSource::Sample);
        assert_eq!(store.revision(), 1);
        let report = store.replace(sample_kpis(), KpiSource::Sample);
        assert_eq!(report.duplicate_ids, vec![40]);
        assert!(report.replaced_keys.is_empty());
        assert_eq!(report.accepted, store.len());
    }

    #[test]
    fn test_replace_keeps_first_position_last_value() {
        let mut store = KpiStore::default();
        let report = store.replace(
            vec![
                record(1, "A", 2023, 1.0),
                record(2, "B", 2023, 2.0),
                record(3, "A", 2023, 9.0),
            ],
            KpiSource::Remote,
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "A");
        assert_eq!(store.records()[0].actual_value, 9.0);
        assert_eq!(store.records()[1].name, "B");
        assert_eq!(report.replaced_keys.len(), 1);
        assert!(report.duplicate_ids.is_empty());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_replace_counts_discarded_entries_per_key() {
        let mut store = KpiStore::default();
        // Monthly entries for one KPI and year collapse into the last one.
        let report = store.replace(
            vec![
                record(1, "Mensal", 2023, 1.0),
                record(2, "B", 2023, 2.0),
                record(3, "Mensal", 2023, 3.0),
                record(4, "B", 2023, 4.0),
                record(5, "Mensal", 2023, 5.0),
            ],
            KpiSource::Remote,
        );
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].actual_value, 5.0);
        let counts: Vec<(&str, usize)> = report
            .replaced_keys
            .iter()
            .map(|(key, n)| (key.name.as_str(), *n))
            .collect();
        assert_eq!(counts, vec![("Mensal", 2), ("B", 1)]);
        assert_eq!(report.discarded_entries(), 3);
    }

    #[test]
    fn test_same_name_different_year_is_distinct() {
        let mut store = KpiStore::default();
        let report = store.replace(
            vec![record(5, "A", 2022, 1.0), record(5, "A", 2023, 2.0)],
            KpiSource::Remote,
        );
        assert_eq!(store.len(), 2);
        assert_eq!(report.duplicate_ids, vec![5]);
        let key = KpiKey {
            name: "A".to_string(),
            year: 2023,
            category: KpiCategory::Social,
        };
        assert_eq!(store.get(&key).map(|r| r.actual_value), Some(2.0));
    }

    #[test]
    fn test_replace_bumps_revision_and_source() {
        let mut store = KpiStore::default();
        let before = store.revision();
        store.replace(Vec::new(), KpiSource::Remote);
        assert!(store.is_empty());
        assert_eq!(store.source(), KpiSource::Remote);
        assert_eq!(store.revision(), before + 1);
    }
}
