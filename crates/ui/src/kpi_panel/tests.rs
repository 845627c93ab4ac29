//! Tests for the KPI panel.

use analytics::fetch::{FetchError, FetchState};
use analytics::store::KpiSource;

use super::types::*;

#[test]
fn test_kpi_panel_visible_by_default() {
    assert!(KpiPanelVisible::default().0, "KPI panel should start open");
}

#[test]
fn test_status_without_api_mentions_sample() {
    let (text, color) = fetch_status(&FetchState::Idle, KpiSource::Sample, false);
    assert!(text.contains("no KPI API"), "got: {text}");
    assert_eq!(color, STATUS_NEUTRAL);
}

#[test]
fn test_status_pending_and_loaded() {
    let (text, color) = fetch_status(&FetchState::Pending { generation: 1 }, KpiSource::Sample, true);
    assert!(text.starts_with("Loading"), "got: {text}");
    assert_eq!(color, STATUS_PENDING);

    let loaded = FetchState::Loaded {
        generation: 1,
        count: 41,
    };
    let (text, color) = fetch_status(&loaded, KpiSource::Remote, true);
    assert_eq!(text, "Loaded 41 KPI entries");
    assert_eq!(color, STATUS_OK);
}

#[test]
fn test_status_failure_shows_error_and_fallback() {
    let failed = FetchState::Failed {
        generation: 2,
        error: FetchError::Http {
            status: 404,
            url: "https://esg.example.com/kpi-entries-with-templates".to_string(),
        },
    };
    let (text, color) = fetch_status(&failed, KpiSource::Sample, true);
    assert!(text.contains("404"), "got: {text}");
    assert!(text.contains("sample data"), "got: {text}");
    assert_eq!(color, STATUS_ERROR);

    let (text, _) = fetch_status(&failed, KpiSource::Remote, true);
    assert!(text.contains("last loaded"), "got: {text}");
}

#[test]
fn test_status_idle_after_remote_load() {
    let (text, color) = fetch_status(&FetchState::Idle, KpiSource::Remote, true);
    assert_eq!(text, "Live data");
    assert_eq!(color, STATUS_OK);
}

#[test]
fn test_attainment_text() {
    assert_eq!(attainment_text(Some(1.25)), "125%");
    assert_eq!(attainment_text(Some(0.5)), "50%");
    assert_eq!(attainment_text(None), "-");
}
