//! Catalog - the loaded working set of project records
//!
//! The catalog is built once at load time and never mutated afterwards:
//!
//! - **Working set**: every record whose `visible` flag is not `false`, in file
//!   order. A record's position in the working set is its stable index.
//! - **Tag universe**: the union of all working-set tags plus any configured
//!   seed tags.
//!
//! Loading reads the data file fresh on every call; nothing is cached.

pub mod error;
pub mod record;

pub use error::{CatalogError, Result};
pub use record::{MediaItem, Numeric, ProjectRecord};

use crate::gallery::sort::collate;
use std::collections::BTreeSet;
use std::path::Path;

/// Working set of project records plus the derived tag universe
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    tags: TagUniverse,
}

/// Set of every tag seen at load time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagUniverse {
    tags: BTreeSet<String>,
}

impl TagUniverse {
    /// Build from an iterator of tags, ignoring blanks
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tags }
    }

    /// Tags in display order (locale-aware collation)
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        tags.sort_by(|a, b| collate(a, b));
        tags
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Catalog {
    /// Build a catalog from decoded records, dropping hidden ones
    #[must_use]
    pub fn new(records: Vec<ProjectRecord>, seed_tags: &[String]) -> Self {
        let total = records.len();
        let records: Vec<ProjectRecord> = records
            .into_iter()
            .filter(ProjectRecord::is_listed)
            .map(|mut record| {
                record.normalize_tags();
                record
            })
            .collect();

        let tags = TagUniverse::from_tags(
            seed_tags
                .iter()
                .chain(records.iter().flat_map(|r| r.tags.iter())),
        );

        tracing::debug!(
            total,
            listed = records.len(),
            tags = tags.len(),
            "built project catalog"
        );

        Self { records, tags }
    }

    /// An empty working set; the tag universe still carries the seed tags
    #[must_use]
    pub fn empty(seed_tags: &[String]) -> Self {
        Self::new(Vec::new(), seed_tags)
    }

    /// Decode a JSON array of project records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the text is not a JSON array of records.
    pub fn from_json(json: &str, seed_tags: &[String]) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records, seed_tags))
    }

    /// Read and decode the data file at `path`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file cannot be read, or
    /// `CatalogError::Parse` if its content is not valid project data.
    pub fn load(path: &Path, seed_tags: &[String]) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, seed_tags)
    }

    /// Load the data file, degrading to an empty working set on failure
    ///
    /// The failure is logged and handed back so a front end can surface it;
    /// it never aborts the caller.
    #[must_use]
    pub fn load_or_empty(path: &Path, seed_tags: &[String]) -> (Self, Option<CatalogError>) {
        match Self::load(path, seed_tags) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "could not load project data");
                (Self::empty(seed_tags), Some(e))
            }
        }
    }

    /// Records of the working set, in file order
    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Record by working-set index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The tag universe
    #[must_use]
    pub const fn tags(&self) -> &TagUniverse {
        &self.tags
    }

    /// Number of working-set records carrying `tag`
    #[must_use]
    pub fn tag_count(&self, tag: &str) -> usize {
        self.records.iter().filter(|r| r.has_tag(tag)).count()
    }
}
