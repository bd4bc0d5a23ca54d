//! Collapsible about panel

use crate::gallery::markup::{self, Segment};
use crate::ui::ratatui_adapter::state::AboutPanel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows the expanded panel takes, borders included
pub const EXPANDED_HEIGHT: u16 = 6;

/// Rows the collapsed panel takes
pub const COLLAPSED_HEIGHT: u16 = 1;

/// About panel widget
pub struct AboutView<'a> {
    panel: &'a AboutPanel,
    theme: &'a Theme,
}

impl<'a> AboutView<'a> {
    #[must_use]
    pub const fn new(panel: &'a AboutPanel, theme: &'a Theme) -> Self {
        Self { panel, theme }
    }

    /// Height for `panel`; zero when there is no about text
    #[must_use]
    pub const fn height(panel: &AboutPanel) -> u16 {
        if !panel.is_shown() {
            0
        } else if panel.expanded {
            EXPANDED_HEIGHT
        } else {
            COLLAPSED_HEIGHT
        }
    }

    /// The clickable header row
    #[must_use]
    pub fn toggle_area(area: Rect) -> Rect {
        Rect::new(area.x, area.y, area.width, if area.height > 0 { 1 } else { 0 })
    }

    fn header(&self) -> Line<'static> {
        let marker = if self.panel.expanded { "▾" } else { "▸" };
        Line::from(vec![
            Span::styled(format!(" {marker} About "), self.theme.cursor_style()),
            Span::styled("(a)", self.theme.dimmed_style()),
        ])
    }

    fn body(&self, text: &str) -> Vec<Line<'static>> {
        text.lines()
            .map(|line| {
                let spans: Vec<Span<'static>> = markup::parse_links(line)
                    .into_iter()
                    .map(|segment| match segment {
                        Segment::Text(t) => Span::raw(t),
                        Segment::Link { label, url } => {
                            Span::styled(format!("{label} <{url}>"), self.theme.link_style())
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for AboutView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(text) = self.panel.text.as_deref() else {
            return;
        };

        if !self.panel.expanded {
            self.header().render(area, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.header());

        Paragraph::new(self.body(text))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
