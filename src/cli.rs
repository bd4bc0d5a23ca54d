//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: interactive terminal gallery (default)
//! - **list**: print the visible projects in render order
//! - **tags**: print the tag universe with usage counts
//! - **render**: write the gallery as an HTML page
//! - **config**: inspect or create the configuration file
//! - **completions**: shell completion scripts
//!
//! Repeated `-t` flags are applied in order, exactly as if each tag had been
//! toggled in the filter bar.

use crate::gallery::SortMode;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the configuration file
    Path,

    /// Write a configuration file with default values
    Init {
        /// Replace an existing file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse and render a tagged project portfolio", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Project data file (JSON array); overrides `data_file` in the config
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive gallery (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Tags to toggle on before the first frame (-t a -t b)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Initial sort mode (order-desc, order-asc, year-desc, year-asc, title-asc, random)
        #[arg(short = 's', long = "sort", value_name = "MODE")]
        sort: Option<SortMode>,
    },

    /// Print the visible projects in render order
    #[command(visible_alias = "ls")]
    List {
        /// Tags to toggle on, in order
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Sort mode
        #[arg(short = 's', long = "sort", value_name = "MODE")]
        sort: Option<SortMode>,
    },

    /// Print every tag with the number of projects using it
    Tags,

    /// Write the gallery as a standalone HTML page
    Render {
        /// Output file
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: PathBuf,

        /// Tags to toggle on, in order
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Sort mode
        #[arg(short = 's', long = "sort", value_name = "MODE")]
        sort: Option<SortMode>,

        /// Render with the modal open on this project (index shown by `list`)
        #[arg(long = "open", value_name = "INDEX")]
        open: Option<usize>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            tags: Vec::new(),
            sort: None,
        })
    }
}
