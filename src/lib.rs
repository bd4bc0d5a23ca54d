//! Folio - a tagged project portfolio with a filter/sort/modal state machine
//!
//! The library holds the whole gallery: loading the catalog, the explicit
//! gallery state and its projections, and the two front ends (static HTML and
//! the terminal browser). The binary only parses arguments and dispatches to
//! [`commands`].

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod gallery;
pub mod output;
pub mod render;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FolioError {
    /// Project data could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
