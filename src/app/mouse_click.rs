//! Mouse click handling
//!
//! Routes left clicks to card activation.

use crate::layout::Region;

use super::app_state::App;

/// Handle a left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Card(index)) => app.activate_card(index),
        // Clicking empty space drops the keyboard selection
        _ => app.suggestions.clear_selection(),
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
