//! Workforce ethnic composition per year.

use std::collections::BTreeMap;

use crate::aggregate::MetricSource;

/// Group names in the order they are stacked on charts.
pub const ETHNIC_GROUPS: [&str; 5] = ["Branca", "Preta", "Parda", "Amarela", "Indígena"];

/// Allowed distance from 100% before a row is reported as inconsistent.
pub const SHARE_SUM_TOLERANCE: f64 = 0.5;

/// Percentages per group for one year. Shares are expected to sum to 100
/// but this is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct EthnicDistributionRow {
    pub year: i32,
    pub shares: BTreeMap<String, f64>,
}

impl EthnicDistributionRow {
    /// Pairs `shares` with [`ETHNIC_GROUPS`] positionally; extra values are
    /// ignored and missing ones left absent.
    pub fn from_shares(year: i32, shares: &[f64]) -> Self {
        let shares = ETHNIC_GROUPS
            .iter()
            .zip(shares)
            .map(|(group, share)| (group.to_string(), *share))
            .collect();
        Self { year, shares }
    }

    pub fn share(&self, group: &str) -> Option<f64> {
        self.shares.get(group).copied()
    }

    pub fn total_share(&self) -> f64 {
        self.shares.values().sum()
    }

    pub fn sums_to_hundred(&self) -> bool {
        (self.total_share() - 100.0).abs() <= SHARE_SUM_TOLERANCE
    }
}

impl MetricSource for EthnicDistributionRow {
    fn metric(&self, key: &str) -> Option<f64> {
        if key == "year" {
            return Some(self.year as f64);
        }
        self.share(key)
    }
}

/// Rows sorted by year. Rows whose shares do not add up to 100 are kept and
/// returned alongside as the list of offending years.
pub fn rows_by_year(rows: &[EthnicDistributionRow]) -> (Vec<&EthnicDistributionRow>, Vec<i32>) {
    let mut sorted: Vec<&EthnicDistributionRow> = rows.iter().collect();
    sorted.sort_by_key(|row| row.year);
    let inconsistent = sorted
        .iter()
        .filter(|row| !row.sums_to_hundred())
        .map(|row| row.year)
        .collect();
    (sorted, inconsistent)
}
