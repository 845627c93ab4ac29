//! KPI entries request: decoding, the request state machine and the shared
//! slot transports deliver into.
//!
//! The app crate owns the actual I/O. It reads [`KpiFetchDispatch`] events,
//! performs the GET, and posts a [`FetchOutcome`] into [`KpiFetchBuffer`];
//! [`apply_fetch_outcomes`] picks it up on the next frame.

mod lifecycle;
mod types;


pub use lifecycle::{
    apply_fetch_outcomes, begin_requested_fetches, cancel_fetch_on_exit, cancel_requested_fetches,
    expire_stalled_fetch, request_initial_fetch, BeginOutcome, KpiFetchLifecycle, Resolution,
};
pub use types::{
    decode_entries, records_from_entries, CancelKpiFetch, DecodedEntries, FetchError,
    FetchOutcome, FetchState, FetchTicket, KpiEntryWithTemplate, KpiFetchBuffer,
    KpiFetchDispatch, RequestKpiFetch,
};
