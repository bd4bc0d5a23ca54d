//! Config command - inspect or create the configuration file

use crate::FolioError;
use crate::cli::ConfigCommands;
use crate::config::FolioConfig;
use crate::ui::OutputWriter;
use std::path::Path;

type Result<T> = std::result::Result<T, FolioError>;

/// Execute the config command
///
/// # Errors
/// Returns an error if the config path is unknown, the file cannot be
/// written, or `init` would overwrite an existing file without `--force`.
pub fn execute(config: &FolioConfig, command: &ConfigCommands, out: &impl OutputWriter) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            out.write(config.to_toml()?.trim_end());
        }
        ConfigCommands::Path => {
            out.write(&FolioConfig::config_path()?.display().to_string());
        }
        ConfigCommands::Init { force } => {
            let path = FolioConfig::config_path()?;
            init(&path, *force)?;
            out.success(&format!("Wrote default configuration to {}", path.display()));
        }
    }
    Ok(())
}

/// Write a default configuration to `path`
///
/// # Errors
/// Returns `FolioError::InvalidInput` if the file exists and `force` is off.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(FolioError::InvalidInput(format!(
            "{} already exists (use --force to replace it)",
            path.display()
        )));
    }
    FolioConfig::default().save_to(path)?;
    Ok(())
}
