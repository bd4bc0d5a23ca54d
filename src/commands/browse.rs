//! Browse command - the interactive terminal gallery

use super::{load_catalog, prepare_gallery};
use crate::config::FolioConfig;
use crate::gallery::SortMode;
use crate::ui::{AppState, Browser, MessageLevel, OutputWriter};
use std::path::Path;

type Result<T> = std::result::Result<T, crate::FolioError>;

/// Execute the browse command
///
/// A data file that cannot be loaded is not fatal: the browser opens on an
/// empty grid with the error in its status bar.
///
/// # Errors
/// Returns an error if the terminal cannot be set up, drawn or restored.
pub fn execute(
    config: &FolioConfig,
    data: &Path,
    tags: &[String],
    sort: Option<SortMode>,
    out: &impl OutputWriter,
) -> Result<()> {
    let (catalog, load_error) = load_catalog(config, data, out);
    let gallery = prepare_gallery(&catalog, config, tags, sort, out);
    let mut state = AppState::with_gallery(catalog, gallery, config.about.clone());

    if let Some(e) = load_error {
        state.add_message(MessageLevel::Error, e.to_string());
    } else {
        state.add_message(
            MessageLevel::Info,
            format!("Loaded {} projects from {}", state.catalog.len(), data.display()),
        );
    }

    Browser::new().run(&mut state)?;
    Ok(())
}
