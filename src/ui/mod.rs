//! User interface layer
//!
//! - [`output`]: plain CLI messages through [`OutputWriter`]
//! - [`ratatui_adapter`]: the interactive terminal browser
//!
//! Both front ends only read the gallery's projections; state changes go
//! through [`crate::gallery::GalleryAction`].

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{AppState, Browser};
