//! List command - print the visible projects in render order

use super::{load_catalog, prepare_gallery};
use crate::catalog::Catalog;
use crate::config::FolioConfig;
use crate::gallery::{GalleryState, SortMode};
use crate::output;
use crate::ui::OutputWriter;
use std::path::Path;

type Result<T> = std::result::Result<T, crate::FolioError>;

/// Execute the list command
///
/// # Errors
///
/// Does not return an error. A missing or unreadable data file is reported
/// as a warning and an empty listing is printed.
pub fn execute(
    config: &FolioConfig,
    data: &Path,
    tags: &[String],
    sort: Option<SortMode>,
    quiet: bool,
    out: &impl OutputWriter,
) -> Result<()> {
    let (catalog, _) = load_catalog(config, data, out);
    let gallery = prepare_gallery(&catalog, config, tags, sort, out);

    let lines = listing(&catalog, &gallery, quiet);
    if lines.is_empty() {
        out.info("No projects to show.");
    } else {
        if !quiet {
            let active = gallery.filters();
            let heading = if active.is_empty() {
                format!("Projects ({}):", gallery.sort_mode().label())
            } else {
                format!(
                    "Projects tagged {} ({}):",
                    active.as_slice().join(" + "),
                    gallery.sort_mode().label()
                )
            };
            out.write(&heading);
        }
        for line in lines {
            out.write(&line);
        }
    }
    Ok(())
}

/// Output lines for the visible set, each project followed by its summary
#[must_use]
pub fn listing(catalog: &Catalog, gallery: &GalleryState, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for index in gallery.visible_order(catalog) {
        let Some(record) = catalog.get(index) else {
            continue;
        };
        lines.push(output::project_line(index, record, quiet));
        if !quiet && let Some(summary) = output::project_summary(record) {
            lines.push(summary);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GallerySettings;

    #[test]
    fn test_quiet_listing_is_titles_in_order() {
        let catalog = Catalog::from_json(
            r#"[
                {"title": "Banner", "year": 2023},
                {"title": "Atlas", "year": 2025, "descShort": "maps"},
                {"title": "Hidden", "visible": false}
            ]"#,
            &[],
        )
        .unwrap();
        let gallery = GalleryState::new(&catalog, SortMode::YearDesc, GallerySettings::default());

        assert_eq!(listing(&catalog, &gallery, true), vec!["Atlas", "Banner"]);
        assert_eq!(listing(&catalog, &gallery, false).len(), 3);
    }
}
