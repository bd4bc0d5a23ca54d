//! Card grid widget
//!
//! Cards flow left to right in render order. Only visible cards are drawn;
//! hidden ones keep their place in the gallery order but take no cell.

use crate::catalog::ProjectRecord;
use crate::gallery::{ActiveFilters, CardView, markup};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows per card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Narrowest card before a column is dropped
pub const MIN_CARD_WIDTH: u16 = 28;

/// Grid geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub inner: Rect,
    pub columns: usize,
    pub rows_visible: usize,
}

impl GridLayout {
    /// Geometry for the grid block at `area`
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let inner = grid_block().inner(area);
        let columns = usize::from((inner.width / MIN_CARD_WIDTH).max(1));
        let rows_visible = usize::from((inner.height / CARD_HEIGHT).max(1));
        Self {
            inner,
            columns,
            rows_visible,
        }
    }

    /// First row to draw so that row `focused_row` stays on screen
    #[must_use]
    pub const fn scroll_for(&self, focused_row: usize, scroll: usize) -> usize {
        if focused_row < scroll {
            focused_row
        } else if focused_row >= scroll + self.rows_visible {
            focused_row + 1 - self.rows_visible
        } else {
            scroll
        }
    }

    /// Cell of the card at `position` among the visible cards, if on screen
    #[must_use]
    pub fn card_rect(&self, position: usize, scroll: usize) -> Option<Rect> {
        let row = position / self.columns;
        let column = position % self.columns;
        if row < scroll || row >= scroll + self.rows_visible {
            return None;
        }

        let width = self.inner.width / u16::try_from(self.columns).ok()?;
        let x = self.inner.x + width * u16::try_from(column).ok()?;
        let y = self.inner.y + CARD_HEIGHT * u16::try_from(row - scroll).ok()?;
        let height = CARD_HEIGHT.min(self.inner.bottom().saturating_sub(y));
        (height > 0 && width > 0).then(|| Rect::new(x, y, width, height))
    }
}

/// Chip cells inside a card, paired with their tag index
#[must_use]
pub fn chip_rects(card: Rect, tags: &[String]) -> Vec<(usize, Rect)> {
    let inner = card_block().inner(card);
    if inner.height < 4 {
        return Vec::new();
    }
    let y = inner.y + 3;
    let mut x = inner.x;
    let mut rects = Vec::new();

    for (i, tag) in tags.iter().enumerate() {
        let width = u16::try_from(chip_label(tag).width()).unwrap_or(u16::MAX);
        if x.saturating_add(width) > inner.right() {
            break;
        }
        rects.push((i, Rect::new(x, y, width, 1)));
        x = x.saturating_add(width + 1);
    }
    rects
}

fn chip_label(tag: &str) -> Span<'static> {
    Span::raw(format!("#{tag}"))
}

fn grid_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn card_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn meta_line(record: &ProjectRecord) -> String {
    let media = record.media();
    let videos = media.iter().filter(|m| m.is_video()).count();
    let images = media.len() - videos;

    let mut parts = Vec::new();
    let year = record.year_label();
    if !year.is_empty() {
        parts.push(year);
    }
    if images > 0 {
        parts.push(format!("{images} image{}", if images == 1 { "" } else { "s" }));
    }
    if videos > 0 {
        parts.push("video".to_string());
    }
    parts.join(" · ")
}

/// Card grid widget
pub struct CardGrid<'a> {
    cards: &'a [CardView<'a>],
    layout: GridLayout,
    scroll: usize,
    focused: Option<usize>,
    active: &'a ActiveFilters,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    #[must_use]
    pub const fn new(
        cards: &'a [CardView<'a>],
        layout: GridLayout,
        scroll: usize,
        active: &'a ActiveFilters,
        theme: &'a Theme,
    ) -> Self {
        Self {
            cards,
            layout,
            scroll,
            focused: None,
            active,
            theme,
        }
    }

    /// Highlight the card with this working-set index
    #[must_use]
    pub const fn with_focus(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    fn render_card(&self, card: &CardView<'_>, area: Rect, buf: &mut Buffer) {
        let record = card.record;
        let focused = self.focused == Some(card.index);
        let block = card_block().border_style(if focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        });
        let inner = block.inner(area);
        block.render(area, buf);

        let short = markup::plain_text(&record.desc_short);
        let lines = vec![
            Line::styled(record.title.clone(), self.theme.title_style()),
            Line::styled(meta_line(record), self.theme.dimmed_style()),
            Line::raw(short),
        ];
        Paragraph::new(lines).render(inner, buf);

        for (i, rect) in chip_rects(area, &record.tags) {
            let tag = &record.tags[i];
            let style = if self.active.contains(tag) {
                self.theme.active_style()
            } else {
                self.theme.tag_style()
            };
            Line::from(chip_label(tag).style(style)).render(rect, buf);
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible: Vec<&CardView<'_>> = self.cards.iter().filter(|c| !c.hidden).collect();
        let block = grid_block()
            .border_style(self.theme.border_style())
            .title(format!(" Projects ({}/{}) ", visible.len(), self.cards.len()));
        block.render(area, buf);

        if visible.is_empty() {
            Paragraph::new(Line::styled("No projects to show", self.theme.dimmed_style()))
                .alignment(Alignment::Center)
                .render(self.layout.inner, buf);
            return;
        }

        for (position, card) in visible.iter().enumerate() {
            if let Some(rect) = self.layout.card_rect(position, self.scroll) {
                self.render_card(card, rect, buf);
            }
        }
    }
}
