//! Configuration file handling
//!
//! Settings live in `<config_dir>/cyberquest/config.toml`. A missing file
//! means defaults; a file that only sets some fields gets defaults for the
//! rest.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::player::Pacing;
use crate::tui::theme::Theme;

/// Errors loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown theme '{0}' (expected cyber, classic or mono)")]
    UnknownTheme(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Typewriter and terminal widget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Milliseconds per revealed character (0 = instant)
    pub typing_speed_ms: i64,
    /// Wait before each line starts typing
    pub line_lead_in_ms: u64,
    /// Wait after each line is revealed
    pub line_pause_ms: u64,
    /// Wait after the last line before the script counts as finished
    pub completion_hold_ms: u64,
    /// Cursor blink interval (0 = steady cursor)
    pub cursor_blink_ms: u64,
    /// Show lines while they are being typed
    pub live_typing: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 30,
            line_lead_in_ms: 400,
            line_pause_ms: 300,
            completion_hold_ms: 1000,
            cursor_blink_ms: 500,
            live_typing: false,
        }
    }
}

impl PlayerConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing {
            line_lead_in: Duration::from_millis(self.line_lead_in_ms),
            line_pause: Duration::from_millis(self.line_pause_ms),
            completion_hold: Duration::from_millis(self.completion_hold_ms),
        }
    }

    pub fn cursor_blink(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_ms)
    }
}

/// Scoring and flow settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Points awarded for each solved challenge
    pub points_per_level: u32,
    /// Delay between solving a challenge and moving on
    pub advance_delay_ms: u64,
    /// How long a toast stays on screen
    pub toast_lifetime_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_level: 100,
            advance_delay_ms: 2000,
            toast_lifetime_ms: 3000,
        }
    }
}

impl GameConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }
}

/// Look and feel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme: cyber, classic or mono
    pub theme: String,
    /// Upper bound on the event loop's idle wait
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "cyber".to_string(),
            tick_rate_ms: 50,
        }
    }
}

impl UiConfig {
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme).ok_or_else(|| ConfigError::UnknownTheme(self.theme.clone()))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("cyberquest").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write as TOML, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
