//! # Configuration Persistence
//!
//! User defaults stored in `~/.config/termprompt/config.json`.
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the platform config directory resolved by the `directories` crate. Every
//! field has a default, so an empty object (or a missing file) is a valid
//! configuration.
//!
//! ```text
//! {
//!   "color": "auto",
//!   "pointer": "solid",
//!   "size": 5,
//!   "hide_help": false
//! }
//! ```

use crate::input::Pointer;
use crate::ui::style::Styles;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// When to emit color escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decides once whether output should be colored.
    ///
    /// `Auto` requires stdout to be a terminal reporting more than 8 colors.
    pub fn resolve(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::io::stdout().is_terminal() && crossterm::style::available_color_count() > 8
            }
        }
    }

    pub fn styles(self) -> Styles {
        Styles::new(self.resolve())
    }
}

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub color: ColorMode,

    /// Marker drawn at the text cursor in prompts.
    #[serde(default)]
    pub pointer: Pointer,

    /// Number of list items visible at once.
    #[serde(default = "default_size")]
    pub size: usize,

    #[serde(default)]
    pub hide_help: bool,
}

fn default_size() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            pointer: Pointer::default(),
            size: default_size(),
            hide_help: false,
        }
    }
}

impl Config {
    /// Load configuration from disk. Returns `Config::default()` if the file
    /// does not exist or cannot be parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            tracing::debug!(%err, "using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. A missing file yields the
    /// defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "termprompt")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// List window size, never below one.
    pub fn window_size(&self) -> usize {
        self.size.max(1)
    }
}
