//! Ratatui gallery browser
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Browser                     │
//! │      (terminal setup, draw/poll loop)       │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (gallery)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Widgets are pure projections of [`AppState`]; each frame also refills the
//! hit map so mouse clicks resolve against what was actually drawn.

mod browser;
mod events;
mod hits;
mod state;
mod theme;
pub mod widgets;

pub use browser::Browser;
pub use events::{EventResult, handle_event};
pub use hits::{Hit, HitMap};
pub use state::{AboutPanel, AppState, Mode, StatusMessage};
pub use theme::Theme;
