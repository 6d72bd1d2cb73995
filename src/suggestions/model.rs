//! Suggestion data model and wire decoding
//!
//! The backend returns a JSON envelope:
//! ```text
//! {"suggestions": [{"suggestion": "...", "comment": "...", "command": "..."}, ...]}
//! ```
//! Each element maps onto a [`SuggestionItem`] with `label = suggestion`,
//! `detail = comment`, `action = command`, preserving array order. Sibling
//! fields the backend adds (such as `timestamp`) are ignored.

use serde::Deserialize;

/// One displayed suggestion record
///
/// There is no identity beyond list position. A fresh list replaces the
/// previous one wholesale on every poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// Primary display text
    pub label: String,
    /// Secondary display text
    pub detail: String,
    /// Opaque action token emitted on activation
    pub action: String,
}

impl SuggestionItem {
    pub fn new(
        label: impl Into<String>,
        detail: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            action: action.into(),
        }
    }
}

/// One element of the wire `suggestions` array
///
/// Every field defaults so a partially formed element never aborts the
/// refresh. Elements whose `suggestion` text is empty after defaulting are
/// dropped during decoding.
#[derive(Debug, Deserialize)]
struct WireSuggestion {
    #[serde(default)]
    suggestion: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    command: String,
}

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    #[serde(default)]
    suggestions: Vec<WireSuggestion>,
}

/// Decode a response body into suggestion items, preserving array order.
///
/// A body that is not valid JSON (or not the expected envelope shape) is an
/// error for the caller to absorb. Individual malformed elements are not:
/// missing fields become empty strings and empty-label elements are skipped.
pub fn decode_body(body: &str) -> Result<Vec<SuggestionItem>, serde_json::Error> {
    let envelope: WireEnvelope = serde_json::from_str(body)?;

    Ok(envelope
        .suggestions
        .into_iter()
        .filter(|wire| !wire.suggestion.is_empty())
        .map(|wire| SuggestionItem {
            label: wire.suggestion,
            detail: wire.comment,
            action: wire.command,
        })
        .collect())
}

/// The fixed list shown whenever live data cannot be obtained.
///
/// Exactly these five records in exactly this order, independent of which
/// failure produced them.
pub fn fallback_items() -> Vec<SuggestionItem> {
    vec![
        SuggestionItem::new("🔌 Backend Offline", "Trying to reconnect...", "reconnect"),
        SuggestionItem::new("🎵 Play Focus Music", "Offline mode", "spotify"),
        SuggestionItem::new("📝 Git: Commit Changes", "Local changes", "git"),
        SuggestionItem::new("🧹 Cleanup Downloads", "1.2GB temp files", "cleanup"),
        SuggestionItem::new("🚀 Deploy App", "Ready to deploy", "deploy"),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
