use bevy::prelude::*;

/// Environment variable holding the KPI API base URL (native builds).
pub const API_BASE_URL_ENV: &str = "ESG_API_BASE_URL";

/// Browser query parameter holding the KPI API base URL (`?api=...`).
pub const API_BASE_URL_QUERY_PARAM: &str = "api";

/// Fixed page size of the KPI entries request. No pagination beyond it.
pub const KPI_FETCH_LIMIT: u32 = 1000;

/// Request timeout for native transports.
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// Path of the KPI entries endpoint, relative to the base URL.
pub const KPI_ENTRIES_PATH: &str = "kpi-entries-with-templates";

/// Year selected on first launch.
pub const DEFAULT_REPORTING_YEAR: i32 = 2023;

/// Runtime configuration. Without a base URL the dashboard runs on the
/// compiled-in sample data and never touches the network.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    api_base_url: Option<String>,
}

impl DashboardConfig {
    /// Blank or whitespace-only values count as unset; trailing slashes are
    /// dropped.
    pub fn with_api_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        Self { api_base_url }
    }

    /// Reads [`API_BASE_URL_ENV`].
    pub fn from_env() -> Self {
        Self::with_api_base_url(std::env::var(API_BASE_URL_ENV).ok().as_deref())
    }

    pub fn api_base_url(&self) -> Option<&str> {
        self.api_base_url.as_deref()
    }

    /// Full KPI entries URL, or `None` when no API is configured.
    pub fn kpi_entries_url(&self) -> Option<String> {
        self.api_base_url()
            .map(|base| format!("{base}/{KPI_ENTRIES_PATH}?limit={KPI_FETCH_LIMIT}"))
    }
}
