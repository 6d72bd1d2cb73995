use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;
use crate::suggestions::model::fallback_items;

fn items(labels: &[&str]) -> Vec<SuggestionItem> {
    labels
        .iter()
        .map(|l| SuggestionItem::new(*l, format!("{l} detail"), format!("{l}-action")))
        .collect()
}

fn live_update(labels: &[&str]) -> SuggestionsUpdate {
    SuggestionsUpdate {
        items: items(labels),
        source: UpdateSource::Live,
    }
}

// ========== Initial State Tests ==========

#[test]
fn test_new_state_is_empty() {
    let state = SuggestionsState::new();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
    assert!(state.source.is_none());
    assert!(state.last_updated.is_none());
    assert!(state.last_action.is_none());
    assert!(state.selected().is_none());
    assert!(state.hovered().is_none());
    assert!(!state.flash_active(0));
}

// ========== Replacement Tests ==========

#[test]
fn test_apply_update_replaces_items() {
    let mut state = SuggestionsState::new();

    state.apply_update(live_update(&["a", "b", "c"]));
    assert_eq!(state.len(), 3);
    assert_eq!(state.items[0].label, "a");

    state.apply_update(live_update(&["x"]));
    assert_eq!(state.len(), 1);
    assert_eq!(state.items[0].label, "x");
    // Nothing from the first list survives
    assert!(state.items.iter().all(|i| i.label != "a"));
}

#[test]
fn test_apply_update_is_idempotent() {
    let mut state = SuggestionsState::new();

    state.apply_update(live_update(&["a", "b"]));
    let first = state.items.clone();

    state.apply_update(live_update(&["a", "b"]));
    assert_eq!(state.items, first);
    assert_eq!(state.len(), 2);
}

#[test]
fn test_apply_update_empty_list_shows_zero_cards() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b"]));

    state.apply_update(live_update(&[]));
    assert!(state.is_empty());
}

#[test]
fn test_apply_update_sets_provenance_and_timestamp() {
    let mut state = SuggestionsState::new();

    state.apply_update(SuggestionsUpdate {
        items: fallback_items(),
        source: UpdateSource::Fallback,
    });
    assert_eq!(state.source, Some(UpdateSource::Fallback));
    assert!(state.last_updated.is_some());

    state.apply_update(live_update(&["a"]));
    assert_eq!(state.source, Some(UpdateSource::Live));
}

#[test]
fn test_apply_update_keeps_in_range_selection() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));
    state.navigate_next();
    state.navigate_next();
    assert_eq!(state.selected(), Some(1));

    state.apply_update(live_update(&["x", "y"]));
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn test_apply_update_clears_out_of_range_selection() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));
    state.navigate_previous();
    assert_eq!(state.selected(), Some(2));

    state.apply_update(live_update(&["x"]));
    assert!(state.selected().is_none());
}

#[test]
fn test_apply_update_clears_out_of_range_hover() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));
    state.set_hovered(Some(2));

    state.apply_update(live_update(&["x"]));
    assert!(state.hovered().is_none());
}

#[test]
fn test_apply_update_clears_flash() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b"]));
    state.activate(0);
    assert!(state.flash_active(0));

    state.apply_update(live_update(&["a", "b"]));
    assert!(!state.flash_active(0));
}

// ========== Navigation Tests ==========

#[test]
fn test_navigate_next_from_none_starts_at_first() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));

    state.navigate_next();
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn test_navigate_next_wraps_to_first() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b"]));

    state.navigate_next();
    state.navigate_next();
    assert_eq!(state.selected(), Some(1));

    state.navigate_next();
    assert_eq!(state.selected(), Some(0));
}

#[test]
fn test_navigate_previous_from_none_starts_at_last() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));

    state.navigate_previous();
    assert_eq!(state.selected(), Some(2));
}

#[test]
fn test_navigate_previous_wraps_to_last() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));

    state.navigate_next();
    assert_eq!(state.selected(), Some(0));

    state.navigate_previous();
    assert_eq!(state.selected(), Some(2));
}

#[test]
fn test_navigation_noop_when_empty() {
    let mut state = SuggestionsState::new();

    state.navigate_next();
    assert!(state.selected().is_none());

    state.navigate_previous();
    assert!(state.selected().is_none());
}

#[test]
fn test_clear_selection() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a"]));
    state.navigate_next();
    assert!(state.selected().is_some());

    state.clear_selection();
    assert!(state.selected().is_none());
}

// ========== Hover Tests ==========

#[test]
fn test_set_hovered_in_range() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b"]));

    state.set_hovered(Some(1));
    assert_eq!(state.hovered(), Some(1));
}

#[test]
fn test_set_hovered_out_of_range_ignored() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b"]));

    state.set_hovered(Some(5));
    assert!(state.hovered().is_none());
}

#[test]
fn test_clear_hover() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a"]));
    state.set_hovered(Some(0));

    state.clear_hover();
    assert!(state.hovered().is_none());
}

// ========== Activation Tests ==========

#[test]
fn test_activate_returns_label_and_action() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["Play Music"]));

    let emitted = state.activate(0);
    assert_eq!(
        emitted,
        Some(("Play Music".to_string(), "Play Music-action".to_string()))
    );
}

#[test]
fn test_activate_records_last_action() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b"]));

    state.activate(1);
    assert_eq!(
        state.last_action,
        Some(("b".to_string(), "b-action".to_string()))
    );
}

#[test]
fn test_activate_starts_flash_on_that_card_only() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a", "b", "c"]));

    state.activate(1);
    assert!(!state.flash_active(0));
    assert!(state.flash_active(1));
    assert!(!state.flash_active(2));
}

#[test]
fn test_activate_out_of_range_returns_none() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a"]));

    assert!(state.activate(3).is_none());
    assert!(state.last_action.is_none());
    assert!(!state.has_flash());
}

#[test]
fn test_flash_expires_after_deadline() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a"]));

    // Deadline already in the past
    state.force_flash(0, Instant::now() - Duration::from_millis(1));
    assert!(!state.flash_active(0));

    state.expire_flash();
    assert!(!state.has_flash());
}

#[test]
fn test_expire_flash_keeps_live_flash() {
    let mut state = SuggestionsState::new();
    state.apply_update(live_update(&["a"]));

    state.force_flash(0, Instant::now() + Duration::from_secs(60));
    state.expire_flash();
    assert!(state.has_flash());
    assert!(state.flash_active(0));
}

// ========== Property Tests ==========

// For any non-empty list and any sequence of navigation steps, the selection
// stays in range.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_navigation_stays_in_range(
        count in 1usize..20usize,
        steps in prop::collection::vec(prop::bool::ANY, 1..50),
    ) {
        let labels: Vec<String> = (0..count).map(|i| format!("item{i}")).collect();
        let label_refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();

        let mut state = SuggestionsState::new();
        state.apply_update(live_update(&label_refs));

        for forward in steps {
            if forward {
                state.navigate_next();
            } else {
                state.navigate_previous();
            }
            let selected = state.selected().unwrap();
            prop_assert!(selected < count, "selection {} out of range {}", selected, count);
        }
    }

    // For any two updates, the displayed list after applying both equals the
    // second update's list exactly.
    #[test]
    fn prop_display_depends_only_on_last_update(
        first in prop::collection::vec("[a-z]{1,8}", 0..8),
        second in prop::collection::vec("[a-z]{1,8}", 0..8),
    ) {
        let first_refs: Vec<&str> = first.iter().map(|s| s.as_str()).collect();
        let second_refs: Vec<&str> = second.iter().map(|s| s.as_str()).collect();

        let mut state = SuggestionsState::new();
        state.apply_update(live_update(&first_refs));
        state.apply_update(live_update(&second_refs));

        prop_assert_eq!(state.items.clone(), items(&second_refs));
    }
}
