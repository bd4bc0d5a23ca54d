//! Terminal gallery browser
//!
//! Owns the terminal for the lifetime of [`Browser::run`]: draws the frame,
//! records clickable regions and feeds events back into [`AppState`].

use super::events::{EventResult, poll_and_handle};
use super::hits::{Hit, HitMap};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{
    AboutView, CardGrid, FilterBar, GridLayout, HelpBar, HelpOverlay, ModalAreas, ProjectModal,
    StatusBar, button_rects, chip_rects, rows_needed,
};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Terminal front end for the gallery
#[derive(Debug, Default)]
pub struct Browser {
    theme: Theme,
}

impl Browser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up, drawn or polled.
    pub fn run(&self, state: &mut AppState) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        let size = terminal.size()?;
        state.resize(size.width);
        info!(
            projects = state.catalog.len(),
            width = size.width,
            "browser started"
        );

        while !state.should_exit {
            state.cleanup_messages();
            terminal.draw(|frame| self.render(frame, state))?;

            match poll_and_handle(state, Duration::from_millis(100))? {
                EventResult::Quit => state.should_exit = true,
                EventResult::OpenExternal(target) => Self::open_external(state, target),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        debug!("browser loop finished");
        Ok(())
    }

    fn open_external(state: &mut AppState, target: String) {
        match open::that_detached(&target) {
            Ok(()) => state.add_message(MessageLevel::Info, format!("Opened {target}")),
            Err(source) => {
                let error = UiError::OpenError { target, source };
                warn!(%error, "external link failed");
                state.add_message(MessageLevel::Error, error.to_string());
            }
        }
    }

    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();
        let theme = &self.theme;
        state.hits.clear();

        let modal_open = state.gallery.modal().is_open();
        state.hints = if modal_open {
            HelpBar::modal_hints()
        } else {
            HelpBar::grid_hints()
        };

        let bar_view = state.gallery.filter_bar(&state.catalog);
        let labels = FilterBar::labels(&bar_view);
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        let bar_height = rows_needed(area.width, &label_refs) + 2;

        let [bar_area, about_area, grid_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(bar_height),
            Constraint::Length(AboutView::height(&state.about)),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        // Filter bar
        let mut bar = FilterBar::new(&bar_view, state.filter_cursor, theme);
        if modal_open {
            bar = bar.unfocused();
        }
        frame.render_widget(bar, bar_area);
        for (i, rect) in button_rects(FilterBar::inner(bar_area), &label_refs)
            .into_iter()
            .enumerate()
        {
            if let Some(rect) = rect {
                state.hits.push(rect, Hit::FilterButton(i));
            }
        }

        // About panel
        if state.about.is_shown() {
            frame.render_widget(AboutView::new(&state.about, theme), about_area);
            state.hits.push(AboutView::toggle_area(about_area), Hit::AboutToggle);
        }

        // Card grid
        let cards = state.gallery.grid(&state.catalog);
        let layout = GridLayout::new(grid_area);
        state.grid_columns = layout.columns;
        let visible: Vec<_> = cards.iter().filter(|c| !c.hidden).collect();
        let focused_position = state
            .focused
            .and_then(|f| visible.iter().position(|c| c.index == f))
            .unwrap_or(0);
        state.grid_scroll = layout.scroll_for(focused_position / layout.columns, state.grid_scroll);

        for (position, card) in visible.iter().enumerate() {
            if let Some(rect) = layout.card_rect(position, state.grid_scroll) {
                state.hits.push(rect, Hit::Card(card.index));
                for (i, chip) in chip_rects(rect, &card.record.tags) {
                    state.hits.push(chip, Hit::Chip(card.record.tags[i].clone()));
                }
            }
        }

        let summary = format!(
            "{}/{} shown · {}",
            visible.len(),
            cards.len(),
            state.gallery.sort_mode().label()
        );
        let grid = CardGrid::new(
            &cards,
            layout,
            state.grid_scroll,
            state.gallery.filters(),
            theme,
        )
        .with_focus(state.focused);
        frame.render_widget(grid, grid_area);

        // Status and help bars
        let messages = state.active_messages();
        frame.render_widget(StatusBar::new(&messages, theme, &summary), status_area);
        frame.render_widget(HelpBar::new(&state.hints, theme), help_area);

        // Overlays
        if let Some(view) = state.gallery.modal_view(&state.catalog) {
            let narrow = state.gallery.viewport().is_narrow();
            let areas = ModalAreas::compute(area, view.media, narrow);
            frame.render_widget(ProjectModal::new(&view, narrow, theme), area);
            Self::register_modal_hits(&mut state.hits, area, &areas);
        }

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme), area);
        }
    }

    fn register_modal_hits(hits: &mut HitMap, area: Rect, areas: &ModalAreas) {
        hits.push(area, Hit::Backdrop);
        hits.push(areas.popup, Hit::ModalBody);
        hits.push(areas.close, Hit::CloseModal);
        hits.push(areas.prev_project, Hit::SiblingPrev);
        hits.push(areas.next_project, Hit::SiblingNext);

        let controls = [
            (areas.tap_left, Hit::TapLeft),
            (areas.tap_right, Hit::TapRight),
            (areas.slide_prev, Hit::SlidePrev),
            (areas.slide_next, Hit::SlideNext),
        ];
        for (rect, hit) in controls {
            if let Some(rect) = rect {
                hits.push(rect, hit);
            }
        }
    }
}
