//! Project modal widget
//!
//! Title, year and tags, the short description, the bilingual description in
//! two columns (stacked when narrow) and the media section: a two-column list
//! up to the carousel threshold, a single-slide carousel beyond it.

use crate::catalog::MediaItem;
use crate::gallery::markup::Segment;
use crate::gallery::{MediaLayout, ModalView, modal::Carousel};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Height of the carousel section, borders included
const CAROUSEL_HEIGHT: u16 = 5;

/// Width of the carousel arrow buttons
const ARROW_WIDTH: u16 = 5;

/// Where each part of the modal is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalAreas {
    pub popup: Rect,
    pub close: Rect,
    pub prev_project: Rect,
    pub next_project: Rect,
    pub header: Rect,
    pub description: Rect,
    pub media: Rect,
    pub slide_prev: Option<Rect>,
    pub slide_next: Option<Rect>,
    /// Left and right halves of the slide, only on narrow viewports
    pub tap_left: Option<Rect>,
    pub tap_right: Option<Rect>,
}

/// Calculate centered area for the modal
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height.min(100)) / 2),
        Constraint::Percentage(height.min(100)),
        Constraint::Percentage((100 - height.min(100)) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width.min(100)) / 2),
        Constraint::Percentage(width.min(100)),
        Constraint::Percentage((100 - width.min(100)) / 2),
    ])
    .split(popup_layout[1])[1]
}

fn media_height(media: &MediaLayout) -> u16 {
    match media {
        MediaLayout::Carousel(_) => CAROUSEL_HEIGHT,
        MediaLayout::Grid(items) => {
            let rows = u16::try_from(items.len().div_ceil(2)).unwrap_or(u16::MAX);
            rows.max(1).saturating_add(2)
        }
    }
}

impl ModalAreas {
    #[must_use]
    pub fn compute(area: Rect, media: &MediaLayout, narrow: bool) -> Self {
        let popup = if narrow {
            centered_rect(96, 94, area)
        } else {
            centered_rect(80, 85, area)
        };
        let inner = Block::default().borders(Borders::ALL).inner(popup);

        let [controls, header, description, media_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(media_height(media)),
        ])
        .areas(inner);

        let close = Rect::new(
            controls.right().saturating_sub(9),
            controls.y,
            9.min(controls.width),
            controls.height,
        );
        let prev_project = Rect::new(controls.x, controls.y, 8.min(controls.width), controls.height);
        let next_project = Rect::new(
            close.x.saturating_sub(9),
            controls.y,
            8.min(controls.width),
            controls.height,
        );

        let mut areas = Self {
            popup,
            close,
            prev_project,
            next_project,
            header,
            description,
            media: media_area,
            slide_prev: None,
            slide_next: None,
            tap_left: None,
            tap_right: None,
        };

        if media.carousel().is_some() {
            let slide = Block::default().borders(Borders::ALL).inner(media_area);
            let [prev, stage, next] = Layout::horizontal([
                Constraint::Length(ARROW_WIDTH),
                Constraint::Min(1),
                Constraint::Length(ARROW_WIDTH),
            ])
            .areas(slide);
            areas.slide_prev = Some(prev);
            areas.slide_next = Some(next);
            if narrow {
                let [left, right] =
                    Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                        .areas(stage);
                areas.tap_left = Some(left);
                areas.tap_right = Some(right);
            }
        }

        areas
    }
}

fn media_label(item: &MediaItem) -> (&'static str, &str) {
    match item {
        MediaItem::Video(url) => ("▶ video", url),
        MediaItem::Image(src) => ("▣ image", src),
    }
}

/// Project modal widget
pub struct ProjectModal<'a> {
    view: &'a ModalView<'a>,
    narrow: bool,
    theme: &'a Theme,
}

impl<'a> ProjectModal<'a> {
    #[must_use]
    pub const fn new(view: &'a ModalView<'a>, narrow: bool, theme: &'a Theme) -> Self {
        Self { view, narrow, theme }
    }

    fn description_lines(&self, segments: &[Segment]) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        for segment in segments {
            match segment {
                Segment::Text(text) => {
                    let mut parts = text.split('\n');
                    if let Some(first) = parts.next()
                        && let Some(last) = lines.last_mut()
                    {
                        last.push_span(Span::raw(first.to_string()));
                    }
                    for part in parts {
                        lines.push(Line::raw(part.to_string()));
                    }
                }
                Segment::Link { label, url } => {
                    if let Some(last) = lines.last_mut() {
                        last.push_span(Span::styled(label.clone(), self.theme.link_style()));
                        last.push_span(Span::styled(format!(" <{url}>"), self.theme.dimmed_style()));
                    }
                }
            }
        }
        lines
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let mut meta = Vec::new();
        if !self.view.year.is_empty() {
            meta.push(Span::styled(self.view.year.clone(), self.theme.info_style()));
        }
        for tag in self.view.tags {
            if !meta.is_empty() {
                meta.push(Span::raw(" "));
            }
            meta.push(Span::styled(format!("#{tag}"), self.theme.tag_style()));
        }

        vec![
            Line::styled(self.view.title.to_string(), self.theme.title_style()),
            Line::from(meta),
            Line::styled(
                self.view.subtitle.to_string(),
                self.theme.normal_style().add_modifier(Modifier::ITALIC),
            ),
        ]
    }

    fn render_controls(&self, areas: &ModalAreas, buf: &mut Buffer) {
        Line::styled("‹ prev", self.theme.cursor_style()).render(areas.prev_project, buf);
        Line::styled("next ›", self.theme.cursor_style()).render(areas.next_project, buf);
        Line::styled("✕ close", self.theme.dimmed_style()).render(areas.close, buf);
    }

    fn render_description(&self, area: Rect, buf: &mut Buffer) {
        let en = self.description_lines(&self.view.desc_en);
        let ko = self.description_lines(&self.view.desc_ko);

        let [left, right] = if self.narrow {
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
        } else {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
        };

        for (lines, column, title) in [(en, left, " EN "), (ko, right, " KO ")] {
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::TOP)
                        .border_style(self.theme.border_style())
                        .title(title),
                )
                .wrap(Wrap { trim: false })
                .render(column, buf);
        }
    }

    fn render_grid(&self, items: &[MediaItem], area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" Media ({}) ", items.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if items.is_empty() {
            Line::styled("No media", self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);
        let (mut left_lines, mut right_lines) = (Vec::new(), Vec::new());
        for (i, item) in items.iter().enumerate() {
            let (kind, source) = media_label(item);
            let line = Line::from(vec![
                Span::styled(format!("{kind} "), self.theme.info_style()),
                Span::raw(source.to_string()),
            ]);
            if i % 2 == 0 {
                left_lines.push(line);
            } else {
                right_lines.push(line);
            }
        }
        Paragraph::new(left_lines).render(left, buf);
        Paragraph::new(right_lines).render(right, buf);
    }

    fn render_carousel(&self, carousel: &Carousel, areas: &ModalAreas, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(
                " Slide {}/{} · offset {}% ",
                carousel.index() + 1,
                carousel.len(),
                carousel.offset_percent()
            ));
        let inner = block.inner(areas.media);
        block.render(areas.media, buf);

        if let Some(prev) = areas.slide_prev {
            Line::styled("  ←", self.theme.cursor_style()).render(prev, buf);
        }
        if let Some(next) = areas.slide_next {
            Line::styled("→  ", self.theme.cursor_style())
                .alignment(Alignment::Right)
                .render(next, buf);
        }

        let stage = Rect::new(
            inner.x + ARROW_WIDTH.min(inner.width),
            inner.y,
            inner.width.saturating_sub(ARROW_WIDTH * 2),
            inner.height,
        );
        let mut lines = Vec::new();
        if let Some(item) = carousel.current() {
            let (kind, source) = media_label(item);
            lines.push(Line::from(vec![
                Span::styled(format!("{kind} "), self.theme.info_style()),
                Span::raw(source.to_string()),
            ]));
        }
        let dots: String = (0..carousel.len())
            .map(|i| if i == carousel.index() { '●' } else { '○' })
            .collect();
        lines.push(Line::styled(dots, self.theme.dimmed_style()));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(stage, buf);
    }
}

impl Widget for ProjectModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = ModalAreas::compute(area, self.view.media, self.narrow);

        Clear.render(areas.popup, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Project ")
            .title_alignment(Alignment::Center)
            .render(areas.popup, buf);

        self.render_controls(&areas, buf);
        Paragraph::new(self.header_lines())
            .wrap(Wrap { trim: true })
            .render(areas.header, buf);
        self.render_description(areas.description, buf);

        match self.view.media {
            MediaLayout::Grid(items) => self.render_grid(items, areas.media, buf),
            MediaLayout::Carousel(carousel) => self.render_carousel(carousel, &areas, buf),
        }
    }
}
