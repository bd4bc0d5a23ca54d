//! Completions command - static shell completion scripts

use crate::cli::Cli;
use clap::{Command, CommandFactory};
use clap_complete::Shell;
use std::io::{self, Write};

type Result<T> = std::result::Result<T, crate::FolioError>;

/// Write the completion script for `shell` to `buf`
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, buf);
}

/// Execute the completions command
///
/// # Errors
/// Returns an error if stdout cannot be flushed.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout();
    generate_static(shell, &mut Cli::command(), &mut stdout);
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_names_subcommands() {
        let mut buf = Vec::new();
        generate_static(Shell::Bash, &mut Cli::command(), &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("folio"));
        assert!(script.contains("render"));
    }
}
