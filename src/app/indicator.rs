//! Header liveness indicator

use ratatui::style::Color;

use crate::theme;

/// Colored dot in the header that steps through a small palette on
/// every applied update, so a frozen poller is visible at a glance
#[derive(Debug, Default)]
pub struct Indicator {
    step: usize,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.step = (self.step + 1) % theme::INDICATOR_COLORS.len();
    }

    pub fn color(&self) -> Color {
        theme::INDICATOR_COLORS[self.step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn test_starts_on_first_palette_color() {
        let indicator = Indicator::new();
        assert_eq!(indicator.color(), theme::INDICATOR_COLORS[0]);
    }

    #[test]
    fn test_advance_steps_through_palette() {
        let mut indicator = Indicator::new();

        indicator.advance();
        assert_eq!(indicator.color(), theme::INDICATOR_COLORS[1]);

        indicator.advance();
        assert_eq!(indicator.color(), theme::INDICATOR_COLORS[2]);
    }

    #[test]
    fn test_palette_wraps_around() {
        let mut indicator = Indicator::new();

        for _ in 0..theme::INDICATOR_COLORS.len() {
            indicator.advance();
        }

        assert_eq!(indicator.color(), theme::INDICATOR_COLORS[0]);
    }
}
