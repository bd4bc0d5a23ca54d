//! Application state for the terminal browser
//!
//! Wraps the [`GalleryState`] with what only the terminal needs: a focused
//! card, a focused filter button, the about panel, status messages and the
//! hit map of the last frame. Gallery changes always go through
//! [`AppState::dispatch`].

use super::hits::HitMap;
use super::widgets::KeyHint;
use crate::catalog::{Catalog, MediaItem};
use crate::gallery::{
    FilterOutcome, GalleryAction, GallerySettings, GalleryState, SlideControl, SortMode,
    Transition, markup,
};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Grid browsing, or the project modal when one is open
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Collapsible about panel
///
/// Collapsed by default on narrow terminals and expanded on wide ones;
/// crossing the breakpoint resets it to that default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPanel {
    pub text: Option<String>,
    pub expanded: bool,
    narrow: bool,
}

impl AboutPanel {
    #[must_use]
    pub const fn new(text: Option<String>, narrow: bool) -> Self {
        Self {
            text,
            expanded: !narrow,
            narrow,
        }
    }

    pub const fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Record the viewport class; resets `expanded` when it changed
    pub const fn set_narrow(&mut self, narrow: bool) {
        if self.narrow != narrow {
            self.narrow = narrow;
            self.expanded = !narrow;
        }
    }

    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.text.is_some()
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub gallery: GalleryState,
    pub mode: Mode,
    /// Working-set index of the focused card
    pub focused: Option<usize>,
    /// Focused filter-bar button; 0 is "All"
    pub filter_cursor: usize,
    pub about: AboutPanel,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pub should_exit: bool,
    /// Cards per grid row, set during render
    pub grid_columns: usize,
    /// First grid row drawn, set during render
    pub grid_scroll: usize,
    /// Clickable regions of the last frame
    pub hits: HitMap,
    pub hints: Vec<KeyHint>,
}

impl AppState {
    /// Initial browser state; the viewport starts wide until the first resize
    #[must_use]
    pub fn new(
        catalog: Catalog,
        sort_mode: SortMode,
        settings: GallerySettings,
        about: Option<String>,
    ) -> Self {
        let gallery = GalleryState::new(&catalog, sort_mode, settings);
        Self::with_gallery(catalog, gallery, about)
    }

    /// Browser state around an existing gallery state
    #[must_use]
    pub fn with_gallery(catalog: Catalog, gallery: GalleryState, about: Option<String>) -> Self {
        let narrow = gallery.viewport().is_narrow();
        let mut state = Self {
            catalog,
            gallery,
            mode: Mode::Normal,
            focused: None,
            filter_cursor: 0,
            about: AboutPanel::new(about, narrow),
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            grid_columns: 1,
            grid_scroll: 0,
            hits: HitMap::default(),
            hints: Vec::new(),
        };
        state.refocus();
        state
    }

    /// Feed one action to the gallery and keep the terminal state in step
    pub fn dispatch(&mut self, action: GalleryAction) -> Transition {
        let transition = self.gallery.dispatch(&self.catalog, action);
        match transition {
            Transition::Filtered(outcome) | Transition::Rendered(outcome) => {
                self.report_outcome(outcome);
                self.refocus();
            }
            Transition::ModalOpened(index) => self.focused = Some(index),
            Transition::Reflowed { .. } => {
                self.about.set_narrow(self.gallery.viewport().is_narrow());
            }
            Transition::ModalClosed | Transition::Slid { .. } | Transition::Unchanged => {}
        }
        transition
    }

    fn report_outcome(&mut self, outcome: FilterOutcome) {
        if outcome.fell_back
            && let Some(kept) = self.gallery.filters().last()
        {
            let text = format!("No project matched every filter, showing '{kept}' only");
            self.add_message(MessageLevel::Warning, text);
        }
    }

    /// Visible cards in render order
    #[must_use]
    pub fn visible(&self) -> Vec<usize> {
        self.gallery.visible_order(&self.catalog)
    }

    /// Keep focus on a visible card, falling back to the first one
    fn refocus(&mut self) {
        let visible = self.visible();
        if !self.focused.is_some_and(|f| visible.contains(&f)) {
            self.focused = visible.first().copied();
        }
    }

    /// Position of the focused card within the visible cards
    #[must_use]
    pub fn focused_position(&self) -> Option<usize> {
        let focused = self.focused?;
        self.visible().iter().position(|&i| i == focused)
    }

    /// Move the card focus by `delta` visible cards, clamped at both ends
    pub fn move_focus(&mut self, delta: isize) {
        let visible = self.visible();
        if visible.is_empty() {
            self.focused = None;
            return;
        }
        let pos = self.focused_position().unwrap_or(0);
        let target = pos.saturating_add_signed(delta).min(visible.len() - 1);
        self.focused = Some(visible[target]);
    }

    /// Move the card focus one grid row
    pub fn move_focus_rows(&mut self, rows: isize) {
        let columns = isize::try_from(self.grid_columns.max(1)).unwrap_or(1);
        self.move_focus(rows.saturating_mul(columns));
    }

    pub fn focus_first(&mut self) {
        self.focused = self.visible().first().copied();
    }

    pub fn focus_last(&mut self) {
        self.focused = self.visible().last().copied();
    }

    /// Number of filter-bar buttons, "All" included
    #[must_use]
    pub fn filter_button_count(&self) -> usize {
        self.catalog.tags().len() + 1
    }

    /// Move the filter-bar cursor, wrapping
    pub fn move_filter_cursor(&mut self, delta: isize) {
        let count = isize::try_from(self.filter_button_count()).unwrap_or(1);
        let current = isize::try_from(self.filter_cursor).unwrap_or(0);
        self.filter_cursor = usize::try_from((current + delta).rem_euclid(count)).unwrap_or(0);
    }

    /// Filter-bar click on button `button` (0 is "All")
    pub fn press_filter(&mut self, button: usize) -> Transition {
        self.filter_cursor = button;
        if button == 0 {
            return self.dispatch(GalleryAction::ShowAll);
        }
        let tag = self
            .catalog
            .tags()
            .sorted()
            .get(button - 1)
            .map(|t| (*t).to_string());
        match tag {
            Some(tag) => self.dispatch(GalleryAction::ToggleFilter(tag)),
            None => Transition::Unchanged,
        }
    }

    /// Toggle the focused filter button
    pub fn toggle_focused_filter(&mut self) -> Transition {
        self.press_filter(self.filter_cursor)
    }

    /// Select the `n`th (1-based) tag chip of the focused card exclusively
    pub fn select_chip(&mut self, n: usize) -> Transition {
        let tag = self
            .focused
            .and_then(|i| self.catalog.get(i))
            .and_then(|record| record.tags.get(n.checked_sub(1)?))
            .cloned();
        match tag {
            Some(tag) => self.dispatch(GalleryAction::SelectTag(tag)),
            None => Transition::Unchanged,
        }
    }

    /// Step the sort selector
    pub fn cycle_sort(&mut self, forward: bool) -> Transition {
        let current = self.gallery.sort_mode();
        let mode = if forward { current.next() } else { current.prev() };
        let transition = self.dispatch(GalleryAction::SetSort(mode));
        self.add_message(MessageLevel::Info, format!("Sorted by {}", mode.label()));
        transition
    }

    /// Open the modal on the focused card
    pub fn open_focused(&mut self) -> Transition {
        match self.focused {
            Some(index) => self.dispatch(GalleryAction::Open(index)),
            None => Transition::Unchanged,
        }
    }

    pub fn slide(&mut self, control: SlideControl) -> Transition {
        self.dispatch(GalleryAction::Slide(control))
    }

    /// Terminal width changed
    pub fn resize(&mut self, width: u16) -> Transition {
        self.dispatch(GalleryAction::Resize(width))
    }

    /// Where `o` should point: the active video, else the first description link
    #[must_use]
    pub fn external_target(&self) -> Option<String> {
        let open = self.gallery.modal_view(&self.catalog)?;
        let active_video = match open.media.carousel() {
            Some(carousel) => carousel.current().filter(|m| m.is_video()),
            None => open.media.items().iter().find(|m| m.is_video()),
        };
        if let Some(MediaItem::Video(url)) = active_video {
            return Some(url.clone());
        }
        let record = self.catalog.get(open.index)?;
        markup::first_link(&record.desc_en).or_else(|| markup::first_link(&record.desc_ko))
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages; errors never expire
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| m.level == MessageLevel::Error || !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages
            .retain(|m| m.level == MessageLevel::Error || !m.is_expired(ttl));
    }
}
