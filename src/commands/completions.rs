//! Completions subcommand handler

use std::io;

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};

/// Write a completion script for `shell` to stdout.
pub fn handle(shell: Shell, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
    Ok(())
}
