//! Event handling for the gallery browser
//!
//! Keys and clicks become calls on [`AppState`]; gallery changes go through
//! its dispatch. Clicks are resolved against the hit map of the last frame.

use super::hits::Hit;
use super::state::{AppState, Mode};
use crate::gallery::{GalleryAction, SlideControl};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tracing::debug;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the browser
    Quit,
    /// Hand this URL to the system browser
    OpenExternal(String),
    /// No action taken
    Ignored,
}

/// Keys while the grid has focus
fn handle_grid_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Char('q'), _) => EventResult::Quit,

        (KeyCode::Left, _) => {
            state.move_focus(-1);
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.move_focus(1);
            EventResult::Continue
        }
        (KeyCode::Up, _) => {
            state.move_focus_rows(-1);
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.move_focus_rows(1);
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.focus_first();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.focus_last();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            state.open_focused();
            EventResult::Continue
        }

        (KeyCode::Char('['), _) => {
            state.move_filter_cursor(-1);
            EventResult::Continue
        }
        (KeyCode::Char(']'), _) => {
            state.move_filter_cursor(1);
            EventResult::Continue
        }
        (KeyCode::Char(' '), _) => {
            state.toggle_focused_filter();
            EventResult::Continue
        }
        (KeyCode::Char(c @ '1'..='9'), _) => {
            let n = c.to_digit(10).map_or(0, |d| d as usize);
            state.select_chip(n);
            EventResult::Continue
        }

        (KeyCode::Char('s'), _) => {
            state.cycle_sort(true);
            EventResult::Continue
        }
        (KeyCode::Char('S'), _) => {
            state.cycle_sort(false);
            EventResult::Continue
        }
        (KeyCode::Char('r'), _) => {
            state.dispatch(GalleryAction::Rerender);
            EventResult::Continue
        }
        (KeyCode::Char('a'), _) => {
            state.about.toggle();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Keys while the project modal is open
fn handle_modal_keys(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.dispatch(GalleryAction::Close);
            EventResult::Continue
        }
        KeyCode::Left => {
            state.dispatch(GalleryAction::Sibling(-1));
            EventResult::Continue
        }
        KeyCode::Right => {
            state.dispatch(GalleryAction::Sibling(1));
            EventResult::Continue
        }
        KeyCode::Char('h' | ',') => {
            state.slide(SlideControl::Prev);
            EventResult::Continue
        }
        KeyCode::Char('l' | '.') => {
            state.slide(SlideControl::Next);
            EventResult::Continue
        }
        KeyCode::Char('o') => state
            .external_target()
            .map_or(EventResult::Ignored, EventResult::OpenExternal),
        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }
    if state.mode == Mode::Help {
        return handle_help_mode(state);
    }
    if matches!(key.code, KeyCode::F(1) | KeyCode::Char('?')) {
        state.mode = Mode::Help;
        return EventResult::Continue;
    }

    if state.gallery.modal().is_open() {
        handle_modal_keys(state, key)
    } else {
        handle_grid_keys(state, key)
    }
}

fn handle_click(state: &mut AppState, hit: Hit) -> EventResult {
    debug!(?hit, "click");
    match hit {
        Hit::FilterButton(button) => {
            state.press_filter(button);
        }
        Hit::Card(index) => {
            state.focused = Some(index);
            state.dispatch(GalleryAction::Open(index));
        }
        Hit::Chip(tag) => {
            state.dispatch(GalleryAction::SelectTag(tag));
        }
        Hit::AboutToggle => state.about.toggle(),
        Hit::Backdrop | Hit::CloseModal => {
            state.dispatch(GalleryAction::Close);
        }
        Hit::SiblingPrev => {
            state.dispatch(GalleryAction::Sibling(-1));
        }
        Hit::SiblingNext => {
            state.dispatch(GalleryAction::Sibling(1));
        }
        Hit::SlidePrev => {
            state.slide(SlideControl::Prev);
        }
        Hit::SlideNext => {
            state.slide(SlideControl::Next);
        }
        Hit::TapLeft => {
            state.slide(SlideControl::TapLeft);
        }
        Hit::TapRight => {
            state.slide(SlideControl::TapRight);
        }
        Hit::ModalBody => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode == Mode::Help {
        return match mouse.kind {
            MouseEventKind::Down(_) => handle_help_mode(state),
            _ => EventResult::Ignored,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match state.hits.at(mouse.column, mouse.row).cloned() {
                Some(hit) => handle_click(state, hit),
                None => EventResult::Ignored,
            }
        }
        MouseEventKind::ScrollUp if !state.gallery.modal().is_open() => {
            state.move_focus_rows(-1);
            EventResult::Continue
        }
        MouseEventKind::ScrollDown if !state.gallery.modal().is_open() => {
            state.move_focus_rows(1);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle one terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(width, _) => {
            state.resize(width);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }
    Ok(handle_event(state, event::read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Numeric, ProjectRecord};
    use crate::gallery::{GallerySettings, GalleryState, SortMode};
    use crate::testing::project;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::layout::Rect;

    fn ranked(title: &str, order: f64, tags: &[&str], images: usize) -> ProjectRecord {
        ProjectRecord {
            order: Some(Numeric::Number(order)),
            images: (0..images).map(|i| format!("{title}/{i}.jpg")).collect(),
            ..project(title, tags)
        }
    }

    fn make_state() -> AppState {
        let catalog = Catalog::new(
            vec![
                ranked("p0", 3.0, &["x"], 8),
                ranked("p1", 2.0, &["y"], 1),
                ranked("p2", 1.0, &["x", "y"], 0),
            ],
            &[],
        );
        let gallery = GalleryState::with_rng(
            &catalog,
            SortMode::OrderDesc,
            GallerySettings::default(),
            StdRng::seed_from_u64(3),
        );
        AppState::with_gallery(catalog, gallery, None)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_grid_navigation_and_open() {
        let mut state = make_state();
        assert_eq!(handle_event(&mut state, key(KeyCode::Right)), EventResult::Continue);
        assert_eq!(state.focused, Some(1));

        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.gallery.modal().current(), Some(1));
    }

    #[test]
    fn test_quit_only_from_grid() {
        let mut state = make_state();
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), EventResult::Continue);
        assert!(!state.gallery.modal().is_open());
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), EventResult::Quit);
    }

    #[test]
    fn test_filter_keys() {
        let mut state = make_state();
        handle_event(&mut state, key(KeyCode::Char(']')));
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(state.gallery.filters().as_slice(), ["x"]);

        handle_event(&mut state, key(KeyCode::Char('[')));
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(state.gallery.filters().is_empty());
    }

    #[test]
    fn test_modal_keys_slide_and_sibling() {
        let mut state = make_state();
        handle_event(&mut state, key(KeyCode::Enter));
        handle_event(&mut state, key(KeyCode::Char('h')));
        assert_eq!(state.gallery.modal().carousel().map(|c| c.index()), Some(7));

        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.gallery.modal().current(), Some(2));
        assert!(state.gallery.modal().carousel().is_none());
    }

    #[test]
    fn test_help_mode_swallows_next_key() {
        let mut state = make_state();
        handle_event(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.mode, Mode::Help);
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), EventResult::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_clicks_resolve_through_hits() {
        let mut state = make_state();
        state.hits.push(Rect::new(0, 0, 10, 1), Hit::Chip("y".into()));
        state.hits.push(Rect::new(0, 5, 10, 5), Hit::Card(2));

        handle_event(&mut state, click(2, 0));
        assert_eq!(state.gallery.filters().as_slice(), ["y"]);

        handle_event(&mut state, click(3, 6));
        assert_eq!(state.gallery.modal().current(), Some(2));

        state.hits.push(Rect::new(0, 0, 80, 24), Hit::Backdrop);
        handle_event(&mut state, click(3, 6));
        assert!(!state.gallery.modal().is_open());
        assert_eq!(handle_event(&mut state, click(90, 90)), EventResult::Ignored);
    }

    #[test]
    fn test_resize_event_reaches_gallery() {
        let mut state = make_state();
        handle_event(&mut state, Event::Resize(60, 30));
        assert!(state.gallery.viewport().is_narrow());
    }
}
