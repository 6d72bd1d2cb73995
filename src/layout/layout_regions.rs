//! Region bookkeeping for mouse interactions

use ratatui::layout::Rect;

/// UI components a mouse position can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Title bar at the top
    Header,
    /// Body of the suggestions pane, outside any card
    CardsPane,
    /// One suggestion card, by list index
    Card(usize),
    /// Hint line at the bottom
    Footer,
}

/// Rectangles recorded during the last draw
///
/// Refilled on every frame, so hit testing always reflects the layout
/// that is actually on screen.
#[derive(Debug, Default)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub cards_pane: Option<Rect>,
    /// One rect per suggestion card, zero-sized when a card got no rows
    pub cards: Vec<Rect>,
    pub footer: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded by the previous frame
    pub fn reset(&mut self) {
        self.header = None;
        self.cards_pane = None;
        self.cards.clear();
        self.footer = None;
    }
}
