//! Renderers for gallery state
//!
//! Only HTML for now; the terminal front end draws the same projections with
//! ratatui widgets under [`crate::ui`].

pub mod html;

pub use html::{PageOptions, render_filter_bar, render_grid, render_modal, render_page};
