//! Poller thread
//!
//! Polls the backend once per interval and pushes every outcome to the
//! UI thread. The first cycle runs immediately on startup so the overlay
//! does not sit empty for a full interval.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::PollerConfig;
use crate::suggestions::{SuggestionsUpdate, UpdateSource, fallback_items};

use super::client;

/// Message that asks the poller thread to stop
#[derive(Debug)]
pub struct Shutdown;

/// Spawn the poller thread
///
/// Updates flow through `update_tx`. The thread stops when a `Shutdown`
/// arrives or either channel closes.
pub fn spawn_poller(
    config: PollerConfig,
    update_tx: Sender<SuggestionsUpdate>,
    shutdown_rx: Receiver<Shutdown>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        poller_loop(&config, &update_tx, &shutdown_rx);
    })
}

/// Main poller loop, one fetch per interval
fn poller_loop(
    config: &PollerConfig,
    update_tx: &Sender<SuggestionsUpdate>,
    shutdown_rx: &Receiver<Shutdown>,
) {
    let interval = Duration::from_secs(config.interval_secs);
    let timeout = Duration::from_secs(config.timeout_secs);

    let client = match client::build_client(timeout) {
        Ok(client) => Some(client),
        Err(e) => {
            log::debug!("HTTP client unavailable, every cycle will fall back: {}", e);
            None
        }
    };

    loop {
        let update = poll_cycle(client.as_ref(), &config.url);
        if update_tx.send(update).is_err() {
            // UI side is gone
            break;
        }

        // Sleep for one interval, waking early on shutdown
        match shutdown_rx.recv_timeout(interval) {
            Ok(Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    log::debug!("Poller thread shutting down");
}

/// Run one fetch and shape the outcome for the UI
///
/// Every failure becomes the fallback list tagged as such; nothing
/// propagates out of a cycle.
fn poll_cycle(client: Option<&reqwest::blocking::Client>, url: &str) -> SuggestionsUpdate {
    let Some(client) = client else {
        return fallback_update();
    };

    match client::fetch_suggestions(client, url) {
        Ok(items) => SuggestionsUpdate {
            items,
            source: UpdateSource::Live,
        },
        Err(e) => {
            log::debug!("Fetch failed: {}", e);
            fallback_update()
        }
    }
}

fn fallback_update() -> SuggestionsUpdate {
    SuggestionsUpdate {
        items: fallback_items(),
        source: UpdateSource::Fallback,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
