//! Tags command - print the tag universe with usage counts

use super::load_catalog;
use crate::config::FolioConfig;
use crate::output;
use crate::ui::OutputWriter;
use std::path::Path;

type Result<T> = std::result::Result<T, crate::FolioError>;

/// Execute the tags command
///
/// Seed tags that no project uses are listed as unused.
///
/// # Errors
///
/// Does not return an error. A missing or unreadable data file is reported
/// as a warning and only the seed tags are printed.
pub fn execute(config: &FolioConfig, data: &Path, quiet: bool, out: &impl OutputWriter) -> Result<()> {
    let (catalog, _) = load_catalog(config, data, out);
    let tags = catalog.tags().sorted();

    if tags.is_empty() {
        out.info("No tags found.");
        return Ok(());
    }

    if !quiet {
        out.write("Tags:");
    }
    for tag in tags {
        out.write(&output::tag_with_count(tag, catalog.tag_count(tag), quiet));
    }
    Ok(())
}
