//! Filter stage: selects KPI records for a (category, year) query.
//!
//! Every function returns a fresh, order-preserving subsequence of its input.
//! An empty result is a valid answer, not an error.

use crate::kpi::{KpiCategory, KpiRecord};

/// Records whose category and year both equal the query, in input order.
pub fn filter_by_category_year(
    records: &[KpiRecord],
    category: KpiCategory,
    year: i32,
) -> Vec<&KpiRecord> {
    records
        .iter()
        .filter(|r| r.category == category && r.year == year)
        .collect()
}

/// Records with the given name, sorted by year (stable for equal years).
pub fn series_by_name<'a>(records: &'a [KpiRecord], name: &str) -> Vec<&'a KpiRecord> {
    let mut series: Vec<&KpiRecord> = records.iter().filter(|r| r.name == name).collect();
    series.sort_by_key(|r| r.year);
    series
}

/// Sorted, de-duplicated years that have at least one record in `category`.
pub fn available_years(records: &[KpiRecord], category: KpiCategory) -> Vec<i32> {
    let mut years: Vec<i32> = records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.year)
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Favourite records, in input order.
pub fn favorites(records: &[KpiRecord]) -> Vec<&KpiRecord> {
    records.iter().filter(|r| r.is_favorite).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_kpis;

    fn ids(records: &[&KpiRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_filter_environment_2023_matches_sample() {
        let kpis = sample_kpis();
        let out = filter_by_category_year(&kpis, KpiCategory::Environment, 2023);
        assert_eq!(ids(&out), vec![1, 2, 8, 21, 22, 28]);
    }

    #[test]
    fn test_filter_is_order_preserving_subsequence() {
        let kpis = sample_kpis();
        for category in KpiCategory::ALL {
            for year in 2019..=2024 {
                let out = filter_by_category_year(&kpis, category, year);
                let mut cursor = 0usize;
                for record in &out {
                    assert_eq!(record.category, category);
                    assert_eq!(record.year, year);
                    let pos = kpis[cursor..]
                        .iter()
                        .position(|k| std::ptr::eq(k, *record))
                        .expect("output element must appear later in input");
                    cursor += pos + 1;
                }
                let expected = kpis
                    .iter()
                    .filter(|k| k.category == category && k.year == year)
                    .count();
                assert_eq!(out.len(), expected);
            }
        }
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let kpis = sample_kpis();
        assert!(filter_by_category_year(&kpis, KpiCategory::Governance, 1999).is_empty());
        assert!(filter_by_category_year(&[], KpiCategory::Social, 2023).is_empty());
    }

    #[test]
    fn test_available_years_sorted_unique() {
        let kpis = sample_kpis();
        assert_eq!(
            available_years(&kpis, KpiCategory::Social),
            vec![2020, 2021, 2022, 2023]
        );
        assert_eq!(
            available_years(&kpis, KpiCategory::Environment),
            vec![2022, 2023]
        );
    }

    #[test]
    fn test_series_by_name_sorted_by_year() {
        let kpis = sample_kpis();
        let ieer = series_by_name(&kpis, "IEER");
        let years: Vec<i32> = ieer.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023]);
    }

    #[test]
    fn test_favorites_keep_order() {
        let kpis = sample_kpis();
        assert_eq!(ids(&favorites(&kpis)), vec![1, 2, 4, 7, 17, 28]);
    }
}
