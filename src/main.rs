//! Folio CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse the gallery interactively (default command)
//! folio
//! folio browse -t illustration -s year-desc
//!
//! # Print the visible set, or every tag with its usage count
//! folio list -t 2024 -t print
//! folio -q tags
//!
//! # Write a static page with a project open
//! folio render -o site/index.html --open 3
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/folio/config.toml` on Linux) and `FOLIO_*` environment
//! variables. Logging goes to stderr, filtered by `FOLIO_LOG`
//! (default `warn`).

use folio::{
    FolioError,
    cli::{Cli, Commands},
    commands::{self, render::RenderRequest},
    config::FolioConfig,
    ui::StdoutWriter,
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, FolioError>;

fn init_logging() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main entry point for the folio CLI
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `FolioError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse_args();
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        return commands::completions(*shell);
    }

    let config = FolioConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let out = StdoutWriter::new(quiet);
    let data = config.data_path(cli.data.as_deref());
    tracing::debug!(data = %data.display(), quiet, "starting");

    match &command {
        Commands::Browse { tags, sort } => {
            commands::browse(&config, &data, tags, *sort, &out)?;
        }
        Commands::List { tags, sort } => {
            commands::list(&config, &data, tags, *sort, quiet, &out)?;
        }
        Commands::Tags => {
            commands::tags(&config, &data, quiet, &out)?;
        }
        Commands::Render {
            output,
            tags,
            sort,
            open,
        } => {
            let request = RenderRequest {
                tags,
                sort: *sort,
                open: *open,
            };
            commands::render(&config, &data, output, &request, &out)?;
        }
        Commands::Config { command } => {
            commands::config(&config, command, &out)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
