//! Browser transport and configuration, via the Fetch API.
//!
//! Usage:
//! `index.html?api=https://esg.example.com/api`

#![cfg(target_arch = "wasm32")]

use analytics::config::API_BASE_URL_QUERY_PARAM;
use analytics::fetch::{FetchError, FetchOutcome, KpiFetchBuffer, KpiFetchDispatch};
use bevy::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Returns `Some(url)` if `?api=...` is present in the browser URL.
pub fn query_api_base_url() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(API_BASE_URL_QUERY_PARAM)
}

/// Spawns one local future per dispatched request.
pub fn spawn_kpi_fetches(
    mut dispatches: EventReader<KpiFetchDispatch>,
    buffer: Res<KpiFetchBuffer>,
) {
    for dispatch in dispatches.read() {
        let ticket = dispatch.ticket.clone();
        let url = dispatch.url.clone();
        let slot = KpiFetchBuffer::clone(&buffer);

        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_text(&url).await;
            if ticket.is_cancelled() {
                return;
            }
            slot.deliver(FetchOutcome {
                generation: ticket.generation(),
                result,
            });
        });
    }
}

async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("window not available".to_string()))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| FetchError::Network(format!("fetch failed: {:?}", e)))?;

    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| FetchError::Network("failed to cast fetch response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let text_promise = response
        .text()
        .map_err(|e| FetchError::Network(format!("response.text() failed: {:?}", e)))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| FetchError::Network(format!("await response text failed: {:?}", e)))?;
    text_value
        .as_string()
        .ok_or_else(|| FetchError::Decode("response text was not a string".to_string()))
}
