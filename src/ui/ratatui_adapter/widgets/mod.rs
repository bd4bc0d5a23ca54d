//! Ratatui widgets for the gallery browser
//!
//! Widgets that take clicks also expose the layout helpers the browser uses
//! to fill the hit map, so drawing and hit-testing agree on geometry.

mod about_panel;
mod card_grid;
mod filter_bar;
mod help_bar;
mod help_overlay;
mod project_modal;
mod status_bar;

pub use about_panel::{AboutView, COLLAPSED_HEIGHT, EXPANDED_HEIGHT};
pub use card_grid::{CardGrid, GridLayout, chip_rects};
pub use filter_bar::{FilterBar, button_rects, rows_needed};
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use project_modal::{ModalAreas, ProjectModal};
pub use status_bar::StatusBar;
