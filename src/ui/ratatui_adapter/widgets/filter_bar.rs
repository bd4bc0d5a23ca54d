//! Filter bar widget: "All", every tag, and the sort mode in the title

use crate::gallery::FilterBarView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Most button rows shown before the bar stops growing
pub const MAX_ROWS: u16 = 3;

/// Filter bar widget
pub struct FilterBar<'a> {
    view: &'a FilterBarView<'a>,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

fn block(title: String) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title)
}

fn button_width(label: &str) -> u16 {
    u16::try_from(Span::raw(label).width()).unwrap_or(u16::MAX).saturating_add(2)
}

/// Lay buttons out left to right, wrapping into new rows
///
/// Buttons that do not fit into `inner` get `None`.
#[must_use]
pub fn button_rects(inner: Rect, labels: &[&str]) -> Vec<Option<Rect>> {
    let mut x = inner.x;
    let mut y = inner.y;

    labels
        .iter()
        .map(|label| {
            let width = button_width(label);
            if x > inner.x && x.saturating_add(width) > inner.right() {
                x = inner.x;
                y = y.saturating_add(1);
            }
            if y >= inner.bottom() || inner.width == 0 {
                return None;
            }
            let rect = Rect::new(x, y, width.min(inner.right() - x), 1);
            x = x.saturating_add(width + 1);
            Some(rect)
        })
        .collect()
}

/// Rows needed to show every button at `width`, capped at [`MAX_ROWS`]
#[must_use]
pub fn rows_needed(width: u16, labels: &[&str]) -> u16 {
    let inner = Rect::new(0, 0, width.saturating_sub(2), MAX_ROWS);
    button_rects(inner, labels)
        .iter()
        .flatten()
        .map(|r| r.y + 1)
        .max()
        .unwrap_or(1)
        .max(1)
}

impl<'a> FilterBar<'a> {
    #[must_use]
    pub const fn new(view: &'a FilterBarView<'a>, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            view,
            cursor,
            focused: true,
            theme,
        }
    }

    /// Draw the cursor dimmed, as when a modal is on top
    #[must_use]
    pub const fn unfocused(mut self) -> Self {
        self.focused = false;
        self
    }

    /// Labels in display order
    #[must_use]
    pub fn labels(view: &FilterBarView<'_>) -> Vec<String> {
        view.buttons.iter().map(|b| b.label().to_string()).collect()
    }

    /// Area inside the border
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        block(String::new()).inner(area)
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Filters · Sort: {} (s) ", self.view.sort_mode.label());
        let block = block(title).border_style(self.theme.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let labels = Self::labels(self.view);
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

        for (i, (button, rect)) in self
            .view
            .buttons
            .iter()
            .zip(button_rects(inner, &labels))
            .enumerate()
        {
            let Some(rect) = rect else { continue };
            let mut style = if button.active {
                self.theme.active_style()
            } else if button.tag.is_some() {
                self.theme.tag_style()
            } else {
                self.theme.normal_style()
            };
            if self.focused && i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            Line::from(Span::styled(format!(" {} ", button.label()), style)).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_wrap_into_rows() {
        let inner = Rect::new(1, 1, 20, 3);
        let rects = button_rects(inner, &["All", "illustration", "typography", "2024"]);

        assert_eq!(rects[0], Some(Rect::new(1, 1, 5, 1)));
        assert_eq!(rects[1], Some(Rect::new(7, 1, 14, 1)));
        assert_eq!(rects[2], Some(Rect::new(1, 2, 12, 1)));
        assert_eq!(rects[3], Some(Rect::new(14, 2, 6, 1)));
    }

    #[test]
    fn test_overflowing_buttons_are_dropped() {
        let inner = Rect::new(0, 0, 10, 1);
        let rects = button_rects(inner, &["All", "illustration", "zine"]);
        assert!(rects[0].is_some());
        assert!(rects[1].is_none());
        assert!(rects[2].is_none());
    }

    #[test]
    fn test_rows_needed() {
        assert_eq!(rows_needed(80, &["All", "a", "b"]), 1);
        assert_eq!(rows_needed(12, &["All", "illustration", "zine"]), 3);
        assert_eq!(rows_needed(80, &[]), 1);
    }
}
