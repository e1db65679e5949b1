//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use cyberquest::tui::current_theme;
use cyberquest::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let theme = current_theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print the config file location.
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// What `init` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    Kept,
}

/// Write a default config to `path`. An existing file is only replaced
/// with `force`.
pub fn init_config(path: &Path, force: bool) -> Result<InitOutcome> {
    let exists = path.exists();
    if exists && !force {
        return Ok(InitOutcome::Kept);
    }
    Config::default().save_to(path)?;
    Ok(if exists {
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    })
}

#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();
    match init_config(path, force)? {
        InitOutcome::Created => println!(
            "{}",
            theme.success_text(&format!("Created {}", path.display()))
        ),
        InitOutcome::Overwritten => println!(
            "{}",
            theme.warning_text(&format!("Replaced {} with defaults", path.display()))
        ),
        InitOutcome::Kept => println!(
            "{}",
            theme.secondary_text(&format!(
                "{} already exists; use --force to overwrite it",
                path.display()
            ))
        ),
    }
    Ok(())
}
