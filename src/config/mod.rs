//! Configuration module for folio
//!
//! Settings live in `<config dir>/folio/config.toml`; every key may be
//! overridden with a `FOLIO_<KEY>` environment variable (for example
//! `FOLIO_DEFAULT_SORT=random`). A missing file means defaults.

use crate::gallery::{GallerySettings, SortMode, modal::DEFAULT_CAROUSEL_THRESHOLD};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Data file used when neither `--data` nor `data_file` is given
pub const DEFAULT_DATA_FILE: &str = "projects.json";

/// Terminal width (columns) below which the viewport is narrow
pub const DEFAULT_NARROW_WIDTH: u16 = 100;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FolioConfig {
    /// Project data file
    pub data_file: Option<PathBuf>,

    /// Sort mode on startup
    pub default_sort: SortMode,

    /// Media counts above this open as a carousel
    pub carousel_threshold: usize,

    /// Narrow-viewport breakpoint in terminal columns
    pub narrow_width: u16,

    /// Tags always offered in the filter bar, even when no project uses them
    pub seed_tags: Vec<String>,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Text of the about panel (`[label](url)` links allowed)
    pub about: Option<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_sort: SortMode::default(),
            carousel_threshold: DEFAULT_CAROUSEL_THRESHOLD,
            narrow_width: DEFAULT_NARROW_WIDTH,
            seed_tags: Vec::new(),
            quiet: false,
            about: None,
        }
    }
}

impl FolioConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("folio").join("config.toml"))
    }

    /// Load configuration from the default location plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory is unknown or the file
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path` (optional) plus the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("FOLIO")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("seed_tags"),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory is unknown or the file
    /// cannot be written.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Data file to read: the command-line path wins over `data_file`
    #[must_use]
    pub fn data_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Gallery tunables from this configuration
    #[must_use]
    pub const fn gallery_settings(&self) -> GallerySettings {
        GallerySettings {
            carousel_threshold: self.carousel_threshold,
            narrow_below: self.narrow_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.default_sort, SortMode::OrderDesc);
        assert_eq!(config.carousel_threshold, 6);
        assert_eq!(config.narrow_width, 100);
        assert!(config.seed_tags.is_empty());
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = FolioConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.carousel_threshold, FolioConfig::default().carousel_threshold);
        assert_eq!(config.narrow_width, FolioConfig::default().narrow_width);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "default_sort = \"random\"\ncarousel_threshold = 4\nseed_tags = [\"2025\", \"silkscreen\"]\n",
        )
        .unwrap();

        let config = FolioConfig::load_from(&path).unwrap();
        assert_eq!(config.default_sort, SortMode::Random);
        assert_eq!(config.carousel_threshold, 4);
        assert_eq!(config.seed_tags, vec!["2025", "silkscreen"]);
        assert_eq!(config.narrow_width, DEFAULT_NARROW_WIDTH);
    }

    #[test]
    fn test_bad_sort_mode_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_sort = \"sideways\"\n").unwrap();
        assert!(FolioConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = FolioConfig {
            data_file: Some(PathBuf::from("/srv/site/projects.json")),
            default_sort: SortMode::YearDesc,
            about: Some("Studio [site](https://studio.test)".into()),
            ..FolioConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(FolioConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_data_path_precedence() {
        let mut config = FolioConfig::default();
        assert_eq!(config.data_path(None), PathBuf::from("projects.json"));

        config.data_file = Some(PathBuf::from("from-config.json"));
        assert_eq!(config.data_path(None), PathBuf::from("from-config.json"));
        assert_eq!(
            config.data_path(Some(Path::new("cli.json"))),
            PathBuf::from("cli.json")
        );
    }

    #[test]
    fn test_gallery_settings() {
        let config = FolioConfig {
            carousel_threshold: 3,
            narrow_width: 80,
            ..FolioConfig::default()
        };
        let settings = config.gallery_settings();
        assert_eq!(settings.carousel_threshold, 3);
        assert_eq!(settings.narrow_below, 80);
    }
}
