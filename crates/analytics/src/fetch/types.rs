//! Wire types and lifecycle values for the KPI entries request.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::kpi::{KpiCategory, KpiRecord};

// ---------------------------------------------------------------------------
// Wire record
// ---------------------------------------------------------------------------

/// One element of the `kpi-entries-with-templates` response: a KPI record
/// joined with its template. Numeric fields accept numbers or numeric
/// strings; anything else decodes as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KpiEntryWithTemplate {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub entry_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub template_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub year: i64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub target_value: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub actual_value: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub frequency: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub collection_method: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_opt_bool")]
    pub is_favorite: Option<bool>,
    #[serde(default, deserialize_with = "lenient_opt_bool")]
    pub isfavorite: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub companhia: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub setor: String,
}

impl KpiEntryWithTemplate {
    /// Converts to a [`KpiRecord`]. Returns `None` when the category is not
    /// one of the three ESG categories or the year does not fit an `i32`.
    pub fn into_record(self) -> Option<KpiRecord> {
        let category = KpiCategory::parse(&self.category)?;
        let year = i32::try_from(self.year).ok()?;
        let name = if self.name.trim().is_empty() {
            self.template_name
        } else {
            self.name
        };
        Some(KpiRecord {
            id: self.entry_id.unwrap_or(self.id),
            name,
            category,
            year,
            target_value: self.target_value,
            actual_value: self.actual_value,
            unit: self.unit,
            description: self.description,
            frequency: self.frequency,
            collection_method: self.collection_method,
            status: if self.status.is_empty() {
                self.state
            } else {
                self.status
            },
            is_favorite: self.isfavorite.or(self.is_favorite).unwrap_or(false),
            companhia: self.companhia,
            setor: self.setor,
        })
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).unwrap_or(0.0))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(lenient_opt_i64(deserializer)?.unwrap_or(0))
}

fn lenient_opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|v| v as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// `true`/`false`, `0`/`1` and their string forms; anything else is unset.
fn lenient_opt_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v == 0.0 => Some(false),
            Some(v) if v == 1.0 => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// A response body split into usable entries and a count of array elements
/// that were not KPI objects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedEntries {
    pub entries: Vec<KpiEntryWithTemplate>,
    pub unreadable: usize,
}

/// Parses a response body. Only a body that is not a JSON array fails;
/// elements that are not objects are counted in `unreadable`.
pub fn decode_entries(body: &str) -> Result<DecodedEntries, FetchError> {
    let elements: Vec<Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let mut decoded = DecodedEntries::default();
    for element in elements {
        let entry = match element {
            Value::Object(_) => serde_json::from_value::<KpiEntryWithTemplate>(element).ok(),
            _ => None,
        };
        match entry {
            Some(entry) => decoded.entries.push(entry),
            None => decoded.unreadable += 1,
        }
    }
    Ok(decoded)
}

/// Converts decoded entries, returning the records and the number of
/// elements skipped: unreadable ones plus entries with an unknown category
/// or out-of-range year.
pub fn records_from_entries(decoded: DecodedEntries) -> (Vec<KpiRecord>, usize) {
    let total = decoded.entries.len();
    let records: Vec<KpiRecord> = decoded
        .entries
        .into_iter()
        .filter_map(KpiEntryWithTemplate::into_record)
        .collect();
    let skipped = decoded.unreadable + total - records.len();
    (records, skipped)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a KPI fetch did not produce data. Always local to the KPI panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection, timeout, body read).
    Network(String),
    /// The server answered with a non-success status.
    Http { status: u16, url: String },
    /// The body was not a JSON array of KPI entries.
    Decode(String),
    /// No API base URL is configured.
    NotConfigured,
    /// The request was cancelled before its result was applied.
    Cancelled,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Http { status, url } => write!(f, "HTTP {status} while fetching {url}"),
            FetchError::Decode(msg) => write!(f, "Could not read KPI entries: {msg}"),
            FetchError::NotConfigured => write!(f, "No KPI API configured"),
            FetchError::Cancelled => write!(f, "Request cancelled"),
        }
    }
}

impl std::error::Error for FetchError {}

// ---------------------------------------------------------------------------
// Lifecycle values
// ---------------------------------------------------------------------------

/// Request lifecycle as seen by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Pending {
        generation: u64,
    },
    Loaded {
        generation: u64,
        count: usize,
    },
    Failed {
        generation: u64,
        error: FetchError,
    },
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending { .. })
    }
}

/// Handle shared between the lifecycle and the transport of one request.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    cancelled: Arc<AtomicBool>,
}

impl FetchTicket {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// What a transport reports back for one generation: the raw body or the
/// reason it has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<String, FetchError>,
}

/// Shared slot used to bridge transports -> ECS world.
#[derive(Resource, Default, Clone)]
pub struct KpiFetchBuffer(pub Arc<Mutex<Vec<FetchOutcome>>>);

impl KpiFetchBuffer {
    /// Called from transport threads / futures. A poisoned slot drops the
    /// outcome; the request then fails once its deadline passes.
    pub fn deliver(&self, outcome: FetchOutcome) {
        if let Ok(mut slot) = self.0.lock() {
            slot.push(outcome);
        }
    }

    pub fn drain(&self) -> Vec<FetchOutcome> {
        match self.0.lock() {
            Ok(mut slot) => std::mem::take(&mut *slot),
            Err(_) => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Ask for a (re)load of KPI entries. Ignored while a request is pending.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RequestKpiFetch;

/// Abandon the pending request, if any.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CancelKpiFetch;

/// Emitted once per accepted request; transports turn it into I/O.
#[derive(Event, Debug, Clone)]
pub struct KpiFetchDispatch {
    pub ticket: FetchTicket,
    pub url: String,
}
