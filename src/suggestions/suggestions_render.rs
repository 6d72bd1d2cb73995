//! Card rendering for the suggestions pane
//!
//! Each suggestion renders as a small block: a bold label line plus an
//! indented detail line, with one blank row between blocks. Card
//! rectangles are recorded after every draw so mouse hit testing always
//! matches what is on screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::theme;

/// Render suggestion cards into the pane body
///
/// Updates `app.layout_regions.cards` with one rect per suggestion,
/// zero-sized when the layout ran out of vertical space for a card.
pub fn render_cards(app: &mut App, frame: &mut Frame, area: Rect) {
    app.layout_regions.cards.clear();

    if app.suggestions.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    let max_width = area.width as usize;

    // Pre-calculate lines and block style for each card
    let mut card_blocks: Vec<(Vec<Line<'static>>, Style)> = Vec::new();

    for (i, item) in app.suggestions.items.iter().enumerate() {
        let flashing = app.suggestions.flash_active(i);
        let highlighted = app.suggestions.hovered() == Some(i)
            || app.suggestions.selected() == Some(i);

        let (block_style, label_fg, detail_fg) = if flashing {
            (
                Style::default().bg(theme::FLASH_BG),
                theme::FLASH_FG,
                theme::FLASH_FG,
            )
        } else if highlighted {
            (
                Style::default().bg(theme::CARD_HOVER_BG),
                theme::LABEL_HOVER_FG,
                theme::DETAIL_HOVER_FG,
            )
        } else {
            (
                Style::default().bg(theme::CARD_BG),
                theme::LABEL_FG,
                theme::DETAIL_FG,
            )
        };

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            fit_to_width(&item.label, max_width),
            Style::default().fg(label_fg).add_modifier(Modifier::BOLD),
        ))];

        if !item.detail.is_empty() {
            let detail = fit_to_width(&item.detail, max_width.saturating_sub(3));
            lines.push(Line::from(Span::styled(
                format!("   {detail}"),
                Style::default().fg(detail_fg),
            )));
        }

        card_blocks.push((lines, block_style));
    }

    // One Min constraint per card with a single-row gap between cards.
    // Min instead of Length so the layout degrades when the pane is short.
    let mut constraints: Vec<Constraint> = Vec::new();
    for (lines, _) in &card_blocks {
        constraints.push(Constraint::Min(lines.len() as u16));
        constraints.push(Constraint::Length(1));
    }
    if !constraints.is_empty() {
        constraints.pop();
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut chunk_idx = 0;
    for (lines, style) in card_blocks {
        // Keep the rect list aligned with the item list even when a card
        // received no rows
        if chunk_idx >= chunks.len() || chunks[chunk_idx].height == 0 {
            app.layout_regions.cards.push(Rect::default());
            chunk_idx += 2;
            continue;
        }

        frame.render_widget(Paragraph::new(lines).style(style), chunks[chunk_idx]);
        app.layout_regions.cards.push(chunks[chunk_idx]);
        chunk_idx += 2; // Skip the gap chunk
    }
}

/// Truncate to a display width, ending with an ellipsis when cut
///
/// Width-aware so emoji and other wide glyphs in labels do not overflow
/// the card.
fn fit_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push('…');
    out
}

#[cfg(test)]
#[path = "suggestions_render_tests.rs"]
mod suggestions_render_tests;
