//! Application state

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::poller::Shutdown;
use crate::suggestions::{SuggestionsState, SuggestionsUpdate};

use super::indicator::Indicator;

/// Application state
pub struct App {
    pub config: Config,
    pub suggestions: SuggestionsState,
    pub layout_regions: LayoutRegions,
    pub indicator: Indicator,
    /// Shown as a pin marker in the header; the overlay starts pinned
    pub pinned: bool,
    /// Collapse everything below the header
    pub minimized: bool,
    /// Blank the card area without collapsing it
    pub hidden: bool,
    pub should_quit: bool,
    pub frame_count: usize,
    update_rx: Option<Receiver<SuggestionsUpdate>>,
    shutdown_tx: Option<Sender<Shutdown>>,
    poller_handle: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config) -> Self {
        Self {
            config,
            suggestions: SuggestionsState::new(),
            layout_regions: LayoutRegions::new(),
            indicator: Indicator::new(),
            pinned: true,
            minimized: false,
            hidden: false,
            should_quit: false,
            frame_count: 0,
            update_rx: None,
            shutdown_tx: None,
            poller_handle: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Wire the app to a running poller thread
    pub fn connect_poller(
        &mut self,
        update_rx: Receiver<SuggestionsUpdate>,
        shutdown_tx: Sender<Shutdown>,
        handle: JoinHandle<()>,
    ) {
        self.update_rx = Some(update_rx);
        self.shutdown_tx = Some(shutdown_tx);
        self.poller_handle = Some(handle);
    }

    /// Per-tick state maintenance, run before handling input
    pub fn tick(&mut self) {
        self.drain_updates();
        self.suggestions.expire_flash();
    }

    /// Apply every update the poller has queued, in arrival order
    fn drain_updates(&mut self) {
        let Some(update_rx) = &self.update_rx else {
            return;
        };

        while let Ok(update) = update_rx.try_recv() {
            self.indicator.advance();
            self.suggestions.apply_update(update);
        }
    }

    /// Run the action attached to a card
    ///
    /// Inert while the cards are minimized or hidden. The emitted action
    /// lands in the footer and the log rather than on stdout, which the
    /// terminal owns while the overlay runs.
    pub fn activate_card(&mut self, index: usize) {
        if self.minimized || self.hidden {
            return;
        }

        if let Some((label, action)) = self.suggestions.activate(index) {
            log::info!("Suggestion activated: {} ({})", action, label);
        }
    }

    /// Stop the poller thread and wait for it to finish
    pub fn shutdown_poller(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            // The poller may already be gone; join below settles it
            let _ = shutdown_tx.send(Shutdown);
        }
        self.update_rx = None;

        if let Some(handle) = self.poller_handle.take()
            && handle.join().is_err()
        {
            log::debug!("Poller thread panicked before shutdown");
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
