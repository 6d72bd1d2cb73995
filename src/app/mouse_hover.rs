//! Mouse hover handling
//!
//! Keeps the hovered card in sync with the cursor position.

use crate::layout::Region;

use super::app_state::App;

/// Update hover state for the region under the cursor
pub fn handle_hover(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Card(index)) => app.suggestions.set_hovered(Some(index)),
        _ => {
            if app.suggestions.hovered().is_some() {
                app.suggestions.clear_hover();
            }
        }
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
