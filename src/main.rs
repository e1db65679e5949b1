//! CyberQuest CLI entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::warn;

use cyberquest::quiz::Challenge;
use cyberquest::theme::init_theme;
use cyberquest::{logging, Config};

mod commands;

#[derive(Parser)]
#[command(name = "cyberquest")]
#[command(version, about = "Escape the hacker: a terminal cybersecurity awareness quiz")]
#[command(long_about = "CyberQuest walks you through three security challenges in the terminal:\n\
    spotting a phishing email, auditing weak passwords and finding an insider threat.\n\n\
    Run without arguments to start the game.")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play {
        /// Start at the first challenge without the title, login and briefing
        #[arg(long)]
        skip_intro: bool,
    },
    /// Play a text file through the typewriter terminal
    #[command(long_about = "Play a text file through the typewriter terminal.\n\n\
        Each line of FILE is typed out in turn; blank lines are skipped. Use - to\n\
        read from stdin. When stdout is not a terminal, lines are printed as\n\
        they finish.")]
    Script {
        /// File to play, or - for stdin
        file: PathBuf,
        /// Milliseconds per character (0 shows everything at once)
        #[arg(long, allow_negative_numbers = true)]
        speed: Option<i64>,
        /// Wait for a line of input after the last line
        #[arg(long)]
        interactive: bool,
    },
    /// Print a sampled challenge round, answers included
    Round {
        #[arg(value_enum)]
        challenge: Challenge,
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check a password against the strength rules
    CheckPassword {
        password: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the tips for a challenge
    Tips {
        #[arg(value_enum)]
        challenge: Challenge,
    },
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::config_path()?),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_from(&config_path(cli)?)?;
    match config.ui.theme() {
        Ok(theme) => init_theme(theme),
        Err(err) => warn!(%err, "falling back to the default theme"),
    }
    Ok(config)
}

fn init_logging(verbose: bool) {
    let Some(path) = logging::log_path() else {
        return;
    };
    if let Err(err) = logging::init(&path, verbose) {
        eprintln!("warning: logging disabled: {:#}", err);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        None => commands::play::handle(load_config(&cli)?, false),
        Some(Commands::Play { skip_intro }) => {
            commands::play::handle(load_config(&cli)?, *skip_intro)
        }
        Some(Commands::Script {
            file,
            speed,
            interactive,
        }) => commands::script::handle(&load_config(&cli)?, file, *speed, *interactive),
        Some(Commands::Round {
            challenge,
            json,
            seed,
        }) => {
            load_config(&cli)?;
            commands::round::handle(*challenge, *json, *seed)
        }
        Some(Commands::CheckPassword { password, json }) => {
            load_config(&cli)?;
            commands::check_password::handle(password, *json)
        }
        Some(Commands::Tips { challenge }) => {
            load_config(&cli)?;
            commands::tips::handle(*challenge)
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&load_config(&cli)?),
            ConfigCommands::Path => commands::config::handle_path(&config_path(&cli)?),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(&config_path(&cli)?, *force)
            }
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::handle(*shell, &mut Cli::command())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_play() {
        let cli = Cli::parse_from(["cyberquest"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cyberquest", "tips", "phishing", "-v", "--config", "x.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn negative_speed_is_accepted() {
        let cli = Cli::parse_from(["cyberquest", "script", "-", "--speed", "-5"]);
        match cli.command {
            Some(Commands::Script { speed, .. }) => assert_eq!(speed, Some(-5)),
            _ => panic!("expected script"),
        }
    }
}
