//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "[ ]")
    pub key: String,
    /// Action description (e.g., "open", "filter")
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints while browsing the grid
    #[must_use]
    pub fn grid_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←↑↓→", "move"),
            KeyHint::new("Enter", "open"),
            KeyHint::new("[ ]", "filter"),
            KeyHint::new("Space", "toggle"),
            KeyHint::new("1-9", "chip"),
            KeyHint::new("s", "sort"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }

    /// Hints while the project modal is open
    #[must_use]
    pub fn modal_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("←/→", "project"),
            KeyHint::new("h/l", "slide"),
            KeyHint::new("o", "open link"),
            KeyHint::new("Esc", "close"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
