//! Help overlay widget for displaying the full key reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const GRID_KEYS: &[(&str, &str)] = &[
    ("←↑↓→", "Move between cards"),
    ("Home/End", "First/last card"),
    ("Enter", "Open project"),
    ("[ / ]", "Move filter cursor"),
    ("Space", "Toggle focused filter"),
    ("1-9", "Show only the card's Nth tag"),
    ("s / S", "Next/previous sort mode"),
    ("r", "Render again (reshuffles random)"),
    ("a", "Toggle about panel"),
    ("q / Esc", "Quit"),
];

const MODAL_KEYS: &[(&str, &str)] = &[
    ("← / →", "Previous/next project"),
    ("h / l", "Previous/next slide"),
    (", / .", "Previous/next slide"),
    ("o", "Open video or first link"),
    ("Esc", "Close"),
];

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(
                format!("  {title}"),
                self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ];
        lines.extend(keys.iter().map(|(key, desc)| self.help_line(key, desc)));
        lines.push(Line::default());
        lines
    }

    fn help_line(&self, key: &str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::default()];
        lines.extend(self.section("Gallery", GRID_KEYS));
        lines.extend(self.section("Project", MODAL_KEYS));
        lines.push(Line::styled(
            "  Mouse: click filters, cards, chips; click outside the project to close",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(64, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
