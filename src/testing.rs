//! Testing utilities for folio
//!
//! Record fixtures and a `TempJson` guard for data files on disk.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::ProjectRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A listed record with a title and tags, every other field empty
#[must_use]
pub fn project(title: &str, tags: &[&str]) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        ..ProjectRecord::default()
    }
}

/// RAII guard for a temporary JSON data file
///
/// The file lives in its own temporary directory, removed when the guard is
/// dropped, so parallel tests never collide.
pub struct TempJson {
    path: PathBuf,
    _dir: TempDir,
}

impl TempJson {
    /// Write `content` to a fresh `projects.json`
    ///
    /// # Errors
    /// Returns an `io::Error` if the directory or file cannot be created.
    pub fn create(content: &str) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().join("projects.json");
        let mut file = fs::File::create(&path)?;
        file.write_all(content.as_bytes())?;
        Ok(Self { path, _dir: dir })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_json_cleanup() {
        let path = {
            let temp = TempJson::create("[]").unwrap();
            assert_eq!(fs::read_to_string(temp.path()).unwrap(), "[]");
            temp.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_project_fixture() {
        let record = project("Poster", &["print", "2024"]);
        assert_eq!(record.title, "Poster");
        assert_eq!(record.tags, vec!["print", "2024"]);
        assert!(record.is_listed());
    }
}
