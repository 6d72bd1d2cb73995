//! Suggestion cards: the data model, the displayed-list state, and rendering.

mod model;
pub mod suggestions_render;
mod suggestions_state;

pub use model::{SuggestionItem, decode_body, fallback_items};
pub use suggestions_state::{SuggestionsState, SuggestionsUpdate, UpdateSource};
