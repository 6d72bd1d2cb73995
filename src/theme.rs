//! Shared color palette
//!
//! Catppuccin-derived colors matching the desktop build of the assistant.
//! Kept in one place so render modules stay free of raw RGB literals.

use ratatui::style::Color;

pub const WINDOW_BG: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
pub const CARD_BG: Color = Color::Rgb(0x1a, 0x1a, 0x2e);
pub const CARD_HOVER_BG: Color = Color::Rgb(0x31, 0x32, 0x44);
pub const BORDER: Color = Color::Rgb(0x31, 0x32, 0x44);

pub const LABEL_FG: Color = Color::Rgb(0xf5, 0xe0, 0xdc);
pub const DETAIL_FG: Color = Color::Rgb(0xa6, 0xad, 0xc8);
pub const LABEL_HOVER_FG: Color = Color::Rgb(0x89, 0xb4, 0xfa);
pub const DETAIL_HOVER_FG: Color = Color::Rgb(0xcd, 0xd6, 0xf4);

/// Activation flash inverts the card: accent background, window-dark text.
pub const FLASH_BG: Color = Color::Rgb(0x89, 0xb4, 0xfa);
pub const FLASH_FG: Color = Color::Rgb(0x1e, 0x1e, 0x2e);

pub const ACCENT: Color = Color::Rgb(0x89, 0xb4, 0xfa);
pub const HINT_FG: Color = Color::Rgb(0x6c, 0x70, 0x86);
pub const OFFLINE_FG: Color = Color::Rgb(0xf3, 0x8b, 0xa8);

/// Colors the header indicator dot cycles through, one step per update.
pub const INDICATOR_COLORS: [Color; 5] = [
    Color::Rgb(0xf3, 0x8b, 0xa8),
    Color::Rgb(0xfa, 0xb3, 0x87),
    Color::Rgb(0xf9, 0xe2, 0xaf),
    Color::Rgb(0xa6, 0xe3, 0xa1),
    Color::Rgb(0x89, 0xb4, 0xfa),
];
