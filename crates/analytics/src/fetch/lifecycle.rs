use std::time::Duration;

use bevy::prelude::*;

use super::types::{
    decode_entries, records_from_entries, CancelKpiFetch, FetchError, FetchOutcome, FetchState,
    FetchTicket, KpiFetchBuffer, KpiFetchDispatch, RequestKpiFetch,
};
use crate::config::{DashboardConfig, FETCH_TIMEOUT_SECS};
use crate::kpi::KpiRecord;
use crate::store::{KpiSource, KpiStore};

/// Result of asking the lifecycle to start a request.
#[derive(Debug, Clone)]
pub enum BeginOutcome {
    Dispatched(KpiFetchDispatch),
    AlreadyPending { generation: u64 },
    NotConfigured,
}

/// Result of applying one transport outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Outcome for a generation that is no longer active; discarded.
    Stale { generation: u64 },
    Loaded { records: Vec<KpiRecord>, skipped: usize },
    Failed(FetchError),
}

/// Owns the request state machine. One request may be in flight at a time.
#[derive(Resource, Debug, Default)]
pub struct KpiFetchLifecycle {
    state: FetchState,
    active: Option<FetchTicket>,
    /// Clock reading when the active request began.
    started_at: Option<Duration>,
    last_generation: u64,
}

impl KpiFetchLifecycle {
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Starts a new generation unless one is already pending or there is
    /// nowhere to send it. `now` is the clock reading used for the deadline.
    pub fn begin(&mut self, url: Option<String>, now: Duration) -> BeginOutcome {
        if let FetchState::Pending { generation } = self.state {
            return BeginOutcome::AlreadyPending { generation };
        }
        let Some(url) = url else {
            return BeginOutcome::NotConfigured;
        };
        self.last_generation += 1;
        let ticket = FetchTicket::new(self.last_generation);
        self.active = Some(ticket.clone());
        self.started_at = Some(now);
        self.state = FetchState::Pending {
            generation: ticket.generation(),
        };
        BeginOutcome::Dispatched(KpiFetchDispatch { ticket, url })
    }

    /// Cancels the pending request. Returns the cancelled generation.
    pub fn cancel(&mut self) -> Option<u64> {
        let ticket = self.active.take()?;
        ticket.cancel();
        self.started_at = None;
        self.state = FetchState::Idle;
        Some(ticket.generation())
    }

    /// Fails the pending request once `timeout` has passed since it began.
    /// The ticket is cancelled so a late transport skips delivery. Returns
    /// the expired generation.
    pub fn expire(&mut self, now: Duration, timeout: Duration) -> Option<u64> {
        let started = self.started_at?;
        if now.saturating_sub(started) < timeout {
            return None;
        }
        let ticket = self.active.take()?;
        ticket.cancel();
        self.started_at = None;
        let generation = ticket.generation();
        self.state = FetchState::Failed {
            generation,
            error: FetchError::Network(format!(
                "request timed out after {}s",
                timeout.as_secs()
            )),
        };
        Some(generation)
    }

    /// Applies one outcome. Only the active, non-cancelled generation moves
    /// the state machine; everything else is reported as stale.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> Resolution {
        let generation = outcome.generation;
        let is_active = self
            .active
            .as_ref()
            .is_some_and(|t| t.generation() == generation && !t.is_cancelled());
        if !is_active {
            return Resolution::Stale { generation };
        }
        self.active = None;
        self.started_at = None;

        match outcome.result.and_then(|body| decode_entries(&body)) {
            Ok(decoded) => {
                let (records, skipped) = records_from_entries(decoded);
                self.state = FetchState::Loaded {
                    generation,
                    count: records.len(),
                };
                Resolution::Loaded { records, skipped }
            }
            Err(error) => {
                self.state = FetchState::Failed {
                    generation,
                    error: error.clone(),
                };
                Resolution::Failed(error)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn request_initial_fetch(
    config: Res<DashboardConfig>,
    mut requests: EventWriter<RequestKpiFetch>,
) {
    match config.api_base_url() {
        Some(base) => {
            info!("KPI API configured at {base}; requesting entries");
            requests.send(RequestKpiFetch);
        }
        None => info!("No KPI API configured; showing sample data"),
    }
}

/// Coalesces all requests of a frame into at most one dispatch.
pub fn begin_requested_fetches(
    mut requests: EventReader<RequestKpiFetch>,
    config: Res<DashboardConfig>,
    time: Res<Time<Real>>,
    mut lifecycle: ResMut<KpiFetchLifecycle>,
    mut dispatches: EventWriter<KpiFetchDispatch>,
) {
    if requests.read().count() == 0 {
        return;
    }
    match lifecycle.begin(config.kpi_entries_url(), time.elapsed()) {
        BeginOutcome::Dispatched(dispatch) => {
            info!(
                "Fetching KPI entries (generation {}) from {}",
                dispatch.ticket.generation(),
                dispatch.url
            );
            dispatches.send(dispatch);
        }
        BeginOutcome::AlreadyPending { generation } => {
            debug!("KPI fetch {generation} still pending; ignoring request");
        }
        BeginOutcome::NotConfigured => {
            warn!("KPI fetch requested but {}", FetchError::NotConfigured);
        }
    }
}

pub fn cancel_requested_fetches(
    mut cancels: EventReader<CancelKpiFetch>,
    mut lifecycle: ResMut<KpiFetchLifecycle>,
) {
    if cancels.read().count() == 0 {
        return;
    }
    if let Some(generation) = lifecycle.cancel() {
        info!("KPI fetch {generation}: {}", FetchError::Cancelled);
    }
}

/// Transports without their own timeout (the browser fetch) rely on this
/// to leave `Pending`.
pub fn expire_stalled_fetch(time: Res<Time<Real>>, mut lifecycle: ResMut<KpiFetchLifecycle>) {
    if !lifecycle.is_pending() {
        return;
    }
    let timeout = Duration::from_secs(FETCH_TIMEOUT_SECS);
    if let Some(generation) = lifecycle.expire(time.elapsed(), timeout) {
        error!("KPI fetch {generation} timed out after {}s", timeout.as_secs());
    }
}

pub fn cancel_fetch_on_exit(
    mut exits: EventReader<AppExit>,
    mut lifecycle: ResMut<KpiFetchLifecycle>,
) {
    if exits.read().count() > 0 {
        lifecycle.cancel();
    }
}

/// Drains the shared slot. The store is only touched on a successful load.
pub fn apply_fetch_outcomes(
    buffer: Res<KpiFetchBuffer>,
    mut lifecycle: ResMut<KpiFetchLifecycle>,
    mut store: ResMut<KpiStore>,
) {
    for outcome in buffer.drain() {
        match lifecycle.resolve(outcome) {
            Resolution::Stale { generation } => {
                debug!("Discarding stale KPI fetch outcome (generation {generation})");
            }
            Resolution::Loaded { records, skipped } => {
                if skipped > 0 {
                    warn!("Skipped {skipped} unreadable KPI entries or entries with unknown category or year");
                }
                let report = store.replace(records, KpiSource::Remote);
                info!("Loaded {} KPI records from API", report.accepted);
                if !report.duplicate_ids.is_empty() {
                    warn!("KPI ids used by more than one record: {:?}", report.duplicate_ids);
                }
                for (key, discarded) in &report.replaced_keys {
                    warn!(
                        "Duplicate KPI '{}' ({}, {}): kept the last of {} entries",
                        key.name,
                        key.category.as_str(),
                        key.year,
                        discarded + 1
                    );
                }
            }
            Resolution::Failed(error) => {
                error!("KPI fetch failed: {error}");
            }
        }
    }
}
