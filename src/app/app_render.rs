//! Overlay rendering
//!
//! Single-column frame: a one-row header with the liveness indicator,
//! a bordered pane of suggestion cards, and a one-row footer with key
//! hints and poll status.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::suggestions::UpdateSource;
use crate::theme;

use super::app_state::App;

impl App {
    /// Render the whole overlay
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.layout_regions.reset();

        if self.minimized {
            // Collapsed to a title bar
            let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)])
                .split(frame.area());
            self.render_header(frame, layout[0]);
            return;
        }

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_cards_pane(frame, layout[1]);
        self.render_footer(frame, layout[2]);
    }

    /// Render the header row (top)
    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.indicator.color())),
            Span::styled(
                "✨ Assistant",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if self.suggestions.source == Some(UpdateSource::Fallback) {
            spans.push(Span::styled(
                "  offline",
                Style::default().fg(theme::OFFLINE_FG),
            ));
        }

        if self.pinned {
            spans.push(Span::styled("  📌", Style::default().fg(theme::HINT_FG)));
        }

        if self.minimized {
            spans.push(Span::styled(
                "  (minimized)",
                Style::default().fg(theme::HINT_FG),
            ));
        }

        let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::CARD_BG));

        frame.render_widget(header, area);
        self.layout_regions.header = Some(area);
    }

    /// Render the bordered suggestions pane (middle)
    fn render_cards_pane(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::WINDOW_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.layout_regions.cards_pane = Some(area);

        if self.hidden {
            let placeholder = Paragraph::new("content hidden")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::HINT_FG));
            frame.render_widget(placeholder, inner);
            return;
        }

        crate::suggestions::suggestions_render::render_cards(self, frame, inner);
    }

    /// Render the footer row (bottom): key hints left, poll status right
    fn render_footer(&mut self, frame: &mut Frame, area: Rect) {
        self.layout_regions.footer = Some(area);

        let mut status = String::new();
        if let Some((_, action)) = &self.suggestions.last_action {
            status.push_str(&format!("ran {action}"));
        }
        if let Some(at) = self.suggestions.last_updated {
            if !status.is_empty() {
                status.push_str("  ");
            }
            status.push_str(&format!("updated {}", at.format("%H:%M:%S")));
        }

        let columns = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(status.width() as u16),
        ])
        .split(area);

        if self.config.ui.hints {
            let hints = Paragraph::new(
                " j/k: Navigate | Enter: Run | Ctrl+P: Pin | Ctrl+M: Minimize | Ctrl+H: Hide | q: Quit",
            )
            .style(Style::default().fg(theme::HINT_FG));
            frame.render_widget(hints, columns[0]);
        }

        if !status.is_empty() {
            let status = Paragraph::new(status).style(Style::default().fg(theme::HINT_FG));
            frame.render_widget(status, columns[1]);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
