//! ODS (UN Sustainable Development Goals) project scoring.
//!
//! Each project rates its contribution to up to 17 goals on a 0-2 scale.
//! Two different normalisations are in use:
//!
//! | Output                  | Divisor                         |
//! |-------------------------|---------------------------------|
//! | Per-project score       | count of nonzero goal fields    |
//! | Multi-project radar     | count of projects               |

use serde_json::{Map, Value};

use crate::aggregate::{average_by_key, KeyAverage, MetricSource};

/// Number of ODS goals.
pub const ODS_COUNT: usize = 17;

/// Highest contribution level a project can claim for one goal.
pub const ODS_MAX_LEVEL: f64 = 2.0;

/// Field keys `ods1..ods17`, in goal order.
pub const ODS_KEYS: [&str; ODS_COUNT] = [
    "ods1", "ods2", "ods3", "ods4", "ods5", "ods6", "ods7", "ods8", "ods9", "ods10", "ods11",
    "ods12", "ods13", "ods14", "ods15", "ods16", "ods17",
];

/// A project and its per-goal contribution levels (`None` = not rated).
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub ods: [Option<f64>; ODS_COUNT],
}

impl Project {
    /// Builds a project from a flat JSON object (`{"name": .., "ods1": 2, ..}`).
    /// Non-numeric goal fields are treated as not rated.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let mut ods = [None; ODS_COUNT];
        for (slot, key) in ods.iter_mut().zip(ODS_KEYS) {
            *slot = object.metric(key);
        }
        Self { name, ods }
    }

    /// Level for goal `goal` (1-based).
    pub fn goal(&self, goal: usize) -> Option<f64> {
        if goal == 0 || goal > ODS_COUNT {
            return None;
        }
        self.ods[goal - 1]
    }
}

impl MetricSource for Project {
    fn metric(&self, key: &str) -> Option<f64> {
        let goal = key.strip_prefix("ods")?.parse::<usize>().ok()?;
        self.goal(goal)
    }
}

/// Per-project ODS score on a 0-100 scale.
///
/// `(sum of nonzero levels / count of nonzero levels) / 2 * 100`. A project
/// with no nonzero level scores 0.
pub fn project_ods_score(project: &Project) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for level in project.ods.iter().flatten() {
        if *level != 0.0 {
            sum += level;
            count += 1;
        }
    }
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64) / ODS_MAX_LEVEL * 100.0
}

/// Mean level per goal across all projects (radar input).
pub fn ods_averages(projects: &[Project]) -> Vec<KeyAverage> {
    average_by_key(projects, &ODS_KEYS)
}

/// Axis label for a goal key: `"ods10"` -> `"ODS 10"`. Other keys pass
/// through unchanged.
pub fn ods_label(key: &str) -> String {
    match key.strip_prefix("ods") {
        Some(goal) if goal.parse::<usize>().is_ok() => format!("ODS {goal}"),
        _ => key.to_string(),
    }
}
