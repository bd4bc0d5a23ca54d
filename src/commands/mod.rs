//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and the loaded configuration. The helpers here are the shared first
//! steps: read the catalog and bring a gallery state to the requested filters
//! and sort mode.

pub mod browse;
pub mod completions;
pub mod config;
pub mod list;
pub mod render;
pub mod tags;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use list::execute as list;
pub use render::execute as render;
pub use tags::execute as tags;

use crate::catalog::{Catalog, CatalogError};
use crate::config::FolioConfig;
use crate::gallery::{GalleryState, SortMode};
use crate::ui::OutputWriter;
use std::path::Path;

/// Read the data file, degrading to an empty catalog
///
/// A load failure is reported through `out` and returned so the browser can
/// also show it in its status bar.
pub fn load_catalog(
    config: &FolioConfig,
    data: &Path,
    out: &impl OutputWriter,
) -> (Catalog, Option<CatalogError>) {
    let (catalog, error) = Catalog::load_or_empty(data, &config.seed_tags);
    if let Some(e) = &error {
        out.warning(&format!("{e}; continuing with no projects"));
    }
    (catalog, error)
}

/// Gallery state with `tags` toggled on in order and `sort` (or the
/// configured default) applied
pub fn prepare_gallery(
    catalog: &Catalog,
    config: &FolioConfig,
    tags: &[String],
    sort: Option<SortMode>,
    out: &impl OutputWriter,
) -> GalleryState {
    let sort_mode = sort.unwrap_or(config.default_sort);
    let mut gallery = GalleryState::new(catalog, sort_mode, config.gallery_settings());
    let outcome = gallery.apply_toggles(catalog, tags);

    if outcome.fell_back
        && let Some(kept) = gallery.filters().last()
    {
        out.warning(&format!(
            "No project matched every filter, showing '{kept}' only"
        ));
    }
    gallery
}
