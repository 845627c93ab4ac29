//! Desktop transport: one blocking GET per dispatch on a short-lived thread.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use analytics::config::FETCH_TIMEOUT_SECS;
use analytics::fetch::{FetchError, FetchOutcome, FetchTicket, KpiFetchBuffer, KpiFetchDispatch};
use bevy::prelude::*;

/// Starts a worker thread for every dispatched request.
pub fn spawn_kpi_fetches(
    mut dispatches: EventReader<KpiFetchDispatch>,
    buffer: Res<KpiFetchBuffer>,
) {
    for dispatch in dispatches.read() {
        let ticket = dispatch.ticket.clone();
        let url = dispatch.url.clone();
        let slot = KpiFetchBuffer::clone(&buffer);
        let generation = ticket.generation();

        let spawned = std::thread::Builder::new()
            .name(format!("kpi-fetch-{generation}"))
            .spawn(move || run_fetch(&ticket, &url, &slot));
        if let Err(e) = spawned {
            error!("Could not start KPI fetch thread: {e}");
            buffer.deliver(FetchOutcome {
                generation,
                result: Err(FetchError::Network(e.to_string())),
            });
        }
    }
}

/// Performs the request and delivers its outcome unless the ticket was
/// cancelled meanwhile.
pub(crate) fn run_fetch(ticket: &FetchTicket, url: &str, buffer: &KpiFetchBuffer) {
    if ticket.is_cancelled() {
        return;
    }
    let result = fetch_text(url);
    if ticket.is_cancelled() {
        return;
    }
    buffer.deliver(FetchOutcome {
        generation: ticket.generation(),
        result,
    });
}

fn fetch_text(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    response.text().map_err(|e| FetchError::Network(e.to_string()))
}
