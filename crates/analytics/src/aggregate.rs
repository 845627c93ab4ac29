//! Aggregation stage: per-key running sums and record-count averages.
//!
//! Records expose numeric fields through [`MetricSource`]. A missing or
//! non-numeric field counts as `0.0`, so malformed records shrink an average
//! instead of failing the panel.

use serde_json::{Map, Value};

/// Read access to the numeric fields of a loosely shaped record.
pub trait MetricSource {
    /// Numeric value stored under `key`, or `None` when absent or non-numeric.
    fn metric(&self, key: &str) -> Option<f64>;
}

impl MetricSource for Map<String, Value> {
    fn metric(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
    }
}

impl<T: MetricSource + ?Sized> MetricSource for &T {
    fn metric(&self, key: &str) -> Option<f64> {
        (**self).metric(key)
    }
}

/// Mean (or sum) of one key across a record set.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyAverage {
    pub key: String,
    pub value: f64,
}

/// Sum of every key across `records`, in key order.
pub fn sum_by_key<R: MetricSource>(records: &[R], keys: &[&str]) -> Vec<KeyAverage> {
    let mut sums = vec![0.0_f64; keys.len()];
    for record in records {
        for (sum, key) in sums.iter_mut().zip(keys) {
            *sum += record.metric(key).unwrap_or(0.0);
        }
    }
    keys.iter()
        .zip(sums)
        .map(|(key, value)| KeyAverage {
            key: key.to_string(),
            value,
        })
        .collect()
}

/// Arithmetic mean of every key across `records`, dividing by the record
/// count. An empty input yields `0.0` for every key.
pub fn average_by_key<R: MetricSource>(records: &[R], keys: &[&str]) -> Vec<KeyAverage> {
    let mut out = sum_by_key(records, keys);
    if records.is_empty() {
        return out;
    }
    let count = records.len() as f64;
    for entry in &mut out {
        entry.value /= count;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_average_divides_by_record_count() {
        let records = vec![
            object(json!({"ods1": 2, "ods2": 0})),
            object(json!({"ods1": 0, "ods2": 2})),
        ];
        let out = average_by_key(&records, &["ods1", "ods2"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].key, "ods1");
        assert!((out[0].value - 1.0).abs() < f64::EPSILON);
        assert!((out[1].value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_empty_input_is_zero_not_nan() {
        let records: Vec<Map<String, Value>> = Vec::new();
        let out = average_by_key(&records, &["a", "b", "c"]);
        assert_eq!(out.len(), 3);
        for entry in out {
            assert_eq!(entry.value, 0.0, "{} should be 0", entry.key);
            assert!(!entry.value.is_nan());
        }
    }

    #[test]
    fn test_missing_and_non_numeric_count_as_zero() {
        let records = vec![
            object(json!({"score": 3})),
            object(json!({"score": "n/a"})),
            object(json!({"other": 9})),
        ];
        let out = average_by_key(&records, &["score"]);
        assert!((out[0].value - 1.0).abs() < 1e-9, "got {}", out[0].value);
    }

    #[test]
    fn test_sum_by_key_keeps_key_order() {
        let records = vec![object(json!({"b": 1, "a": 2})), object(json!({"b": 4}))];
        let out = sum_by_key(&records, &["b", "a"]);
        let keys: Vec<&str> = out.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert!((out[0].value - 5.0).abs() < f64::EPSILON);
        assert!((out[1].value - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reference_records_aggregate() {
        let owned = [object(json!({"x": 4})), object(json!({"x": 2}))];
        let borrowed: Vec<&Map<String, Value>> = owned.iter().collect();
        let out = average_by_key(&borrowed, &["x"]);
        assert!((out[0].value - 3.0).abs() < f64::EPSILON);
    }
}
