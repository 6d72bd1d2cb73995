//! Displayed-list state
//!
//! Owns the currently displayed suggestion list plus the interaction state
//! layered on top of it: keyboard selection, mouse hover, and the brief
//! activation flash. Updates arrive as whole-list replacements from the
//! poller thread; this state is only ever mutated on the UI thread.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use super::model::SuggestionItem;

/// How long an activated card keeps its flash styling
pub const FLASH_DURATION: Duration = Duration::from_millis(150);

/// Where an update's list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    /// Decoded from a 200 response
    Live,
    /// Substituted after a fetch failure
    Fallback,
}

/// One poll cycle's result, sent from the poller thread to the UI loop
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionsUpdate {
    pub items: Vec<SuggestionItem>,
    pub source: UpdateSource,
}

/// Activation flash on a single card
#[derive(Debug, Clone, Copy)]
struct Flash {
    index: usize,
    until: Instant,
}

/// State of the displayed suggestion cards
#[derive(Debug)]
pub struct SuggestionsState {
    /// Currently displayed list, replaced wholesale on every applied update
    pub items: Vec<SuggestionItem>,
    /// Provenance of the current list (None until the first update arrives)
    pub source: Option<UpdateSource>,
    /// Local time the last update was applied
    pub last_updated: Option<DateTime<Local>>,
    /// Most recently emitted (label, action) pair
    pub last_action: Option<(String, String)>,
    /// Keyboard selection (None = no selection)
    selected: Option<usize>,
    /// Card under the mouse cursor (None = none)
    hovered: Option<usize>,
    /// Active flash, cleared when its deadline passes or the list changes
    flash: Option<Flash>,
}

impl SuggestionsState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            source: None,
            last_updated: None,
            last_action: None,
            selected: None,
            hovered: None,
            flash: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the displayed list with an update's list.
    ///
    /// The new display depends only on the incoming update: no residue from
    /// the previous list survives. A selection still in range is kept so
    /// keyboard navigation does not reset every cycle; everything else tied
    /// to the old widgets (hover, flash) is dropped.
    pub fn apply_update(&mut self, update: SuggestionsUpdate) {
        self.items = update.items;
        self.source = Some(update.source);
        self.last_updated = Some(Local::now());
        self.flash = None;

        if let Some(selected) = self.selected
            && selected >= self.items.len()
        {
            self.selected = None;
        }
        if let Some(hovered) = self.hovered
            && hovered >= self.items.len()
        {
            self.hovered = None;
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the selection to the next card, wrapping to the first.
    pub fn navigate_next(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.selected = Some(match self.selected {
            Some(current) => (current + 1) % self.items.len(),
            None => 0,
        });
    }

    /// Move the selection to the previous card, wrapping to the last.
    pub fn navigate_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.selected = Some(match self.selected {
            Some(0) | None => self.items.len() - 1,
            Some(current) => current - 1,
        });
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Set the hovered card, ignoring out-of-range indices.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| i < self.items.len());
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Activate the card at `index`: start its flash, record the emission,
    /// and return the (label, action) pair for the caller to log.
    ///
    /// Out-of-range indices return None and change nothing.
    pub fn activate(&mut self, index: usize) -> Option<(String, String)> {
        let item = self.items.get(index)?;
        let emitted = (item.label.clone(), item.action.clone());

        self.flash = Some(Flash {
            index,
            until: Instant::now() + FLASH_DURATION,
        });
        self.last_action = Some(emitted.clone());

        Some(emitted)
    }

    /// Whether the card at `index` is currently flashing.
    pub fn flash_active(&self, index: usize) -> bool {
        match self.flash {
            Some(flash) => flash.index == index && Instant::now() < flash.until,
            None => false,
        }
    }

    /// Drop the flash once its deadline has passed. Called every tick so the
    /// card reverts to idle styling without waiting for another event.
    pub fn expire_flash(&mut self) {
        if let Some(flash) = self.flash
            && Instant::now() >= flash.until
        {
            self.flash = None;
        }
    }

    #[cfg(test)]
    pub(crate) fn force_flash(&mut self, index: usize, until: Instant) {
        self.flash = Some(Flash { index, until });
    }

    #[cfg(test)]
    pub(crate) fn has_flash(&self) -> bool {
        self.flash.is_some()
    }
}

impl Default for SuggestionsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "suggestions_state_tests.rs"]
mod suggestions_state_tests;
