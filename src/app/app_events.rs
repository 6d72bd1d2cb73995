//! Event handling

use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::layout::region_at;

use super::app_state::App;
use super::{mouse_click, mouse_hover};

/// How long to wait for input before running the next tick
const TICK_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Pump one tick: apply pending poller updates, then handle at most
    /// one terminal event
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick();

        if !event::poll(TICK_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        self.handle_card_keys(key);
    }

    /// Handle keys that work regardless of what is on screen
    ///
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.pinned = !self.pinned;
                true
            }
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.minimized = !self.minimized;
                true
            }
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.hidden = !self.hidden;
                true
            }
            _ => false,
        }
    }

    /// Navigation and activation on the card list
    ///
    /// Inert while the cards are minimized or hidden.
    fn handle_card_keys(&mut self, key: KeyEvent) {
        if self.minimized || self.hidden {
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.suggestions.navigate_next(),
            KeyCode::Char('k') | KeyCode::Up => self.suggestions.navigate_previous(),
            KeyCode::Enter => {
                if let Some(index) = self.suggestions.selected() {
                    self.activate_card(index);
                }
            }
            KeyCode::Esc => self.suggestions.clear_selection(),
            _ => {}
        }
    }

    /// Route a mouse event through the regions recorded by the last draw
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region),
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, region),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
