//! Render command - write the gallery as a static HTML page

use super::{load_catalog, prepare_gallery};
use crate::FolioError;
use crate::config::FolioConfig;
use crate::gallery::{GalleryAction, SortMode, Transition};
use crate::render::{PageOptions, render_page};
use crate::ui::OutputWriter;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, FolioError>;

/// What to render
#[derive(Debug, Clone, Default)]
pub struct RenderRequest<'a> {
    pub tags: &'a [String],
    pub sort: Option<SortMode>,
    /// Working-set index of the project shown in the modal
    pub open: Option<usize>,
}

/// Execute the render command
///
/// # Errors
/// Returns `FolioError::InvalidInput` if `open` names no project, or an I/O
/// error if the page cannot be written.
pub fn execute(
    config: &FolioConfig,
    data: &Path,
    output: &Path,
    request: &RenderRequest<'_>,
    out: &impl OutputWriter,
) -> Result<()> {
    let html = page(config, data, request, out)?;
    fs::write(output, html)?;
    out.success(&format!("Wrote {}", output.display()));
    Ok(())
}

/// The HTML document for `request`
///
/// # Errors
/// Returns `FolioError::InvalidInput` if `open` names no project.
pub fn page(
    config: &FolioConfig,
    data: &Path,
    request: &RenderRequest<'_>,
    out: &impl OutputWriter,
) -> Result<String> {
    let (catalog, _) = load_catalog(config, data, out);
    let mut gallery = prepare_gallery(&catalog, config, request.tags, request.sort, out);

    if let Some(index) = request.open
        && gallery.dispatch(&catalog, GalleryAction::Open(index)) == Transition::Unchanged
    {
        return Err(FolioError::InvalidInput(format!(
            "No project with index {index} (the catalog has {})",
            catalog.len()
        )));
    }

    let options = PageOptions {
        about: config.about.clone(),
        ..PageOptions::default()
    };
    Ok(render_page(&catalog, &gallery, &options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TempJson;
    use crate::ui::StdoutWriter;
    use tempfile::TempDir;

    const DATA: &str = r#"[
        {"title": "Poster", "tags": ["print"], "images": ["a.jpg"]},
        {"title": "Reel <cut>", "tags": ["motion"]}
    ]"#;

    #[test]
    fn test_render_writes_page() {
        let data = TempJson::create(DATA).unwrap();
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("index.html");
        let tags = vec!["print".to_string()];
        let request = RenderRequest {
            tags: &tags,
            ..RenderRequest::default()
        };

        execute(&FolioConfig::default(), data.path(), &target, &request, &StdoutWriter::new(true))
            .unwrap();
        let html = fs::read_to_string(&target).unwrap();
        assert!(html.contains("Reel &lt;cut&gt;"));
        assert!(html.contains("project hidden"));
    }

    #[test]
    fn test_open_marks_body() {
        let data = TempJson::create(DATA).unwrap();
        let request = RenderRequest {
            open: Some(0),
            ..RenderRequest::default()
        };
        let html = page(&FolioConfig::default(), data.path(), &request, &StdoutWriter::new(true))
            .unwrap();
        assert!(html.contains(r#"<body class="modal-open"#));
    }

    #[test]
    fn test_open_out_of_range() {
        let data = TempJson::create(DATA).unwrap();
        let request = RenderRequest {
            open: Some(9),
            ..RenderRequest::default()
        };
        let result = page(&FolioConfig::default(), data.path(), &request, &StdoutWriter::new(true));
        assert!(matches!(result, Err(FolioError::InvalidInput(_))));
    }
}
