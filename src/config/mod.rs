//! Configuration for the bankterm renderer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/bankterm/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::theme::Palette;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod palette;
mod serialization;


pub use logging::{
    level_name, FileLogFile, FileLogging, LogFile, LogRotation, LoggingConfig,
    DEFAULT_CAPTURE_CAPACITY,
};
pub use palette::{FilePalette, PaletteConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Width limits
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_UI_WIDTH: usize = crate::render::DEFAULT_BOX_WIDTH;
pub const DEFAULT_PANEL_WIDTH: usize = crate::render::DEFAULT_PANEL_INTERIOR;
pub const DEFAULT_BAR_WIDTH: usize = crate::render::DEFAULT_BAR_WIDTH;

pub const MIN_UI_WIDTH: usize = 10;
pub const MIN_PANEL_WIDTH: usize = 8;
pub const MIN_BAR_WIDTH: usize = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

/// Effective configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Palette preset name (classic, ocean, mono)
    pub theme: String,
    /// Total width of boxes, borders included
    pub ui_width: usize,
    /// Interior width of panels
    pub panel_width: usize,
    /// Cell count of progress bars
    pub bar_width: usize,
    pub palette: PaletteConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
            ui_width: DEFAULT_UI_WIDTH,
            panel_width: DEFAULT_PANEL_WIDTH,
            bar_width: DEFAULT_BAR_WIDTH,
            palette: PaletteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (all fields optional)
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub theme: Option<String>,
    pub ui_width: Option<usize>,
    pub panel_width: Option<usize>,
    pub bar_width: Option<usize>,
    pub palette: Option<FilePalette>,
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path (~/.config/bankterm/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("bankterm").join("config.toml"))
    }

    /// Load from the default path with environment overrides
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Load from an explicit path with environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = Self::read_file_config(path)?;
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Read and parse a config file. A missing file means defaults; a file
    /// that exists but can't be read or parsed is an error.
    pub fn read_file_config(path: &Path) -> Result<FileConfig> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                return Ok(FileConfig::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file {}", path.display()))
            }
        };

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Merge file values and environment lookups over the defaults.
    ///
    /// `env` is consulted for `BANKTERM_THEME`, `BANKTERM_WIDTH` and
    /// `BANKTERM_PANEL_WIDTH`; unparsable numbers are ignored with a warning.
    pub fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("BANKTERM_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Box width: env > file > default
        let ui_width = env_usize(&env, "BANKTERM_WIDTH")
            .or(file.ui_width)
            .unwrap_or(defaults.ui_width);

        // Panel width: env > file > default
        let panel_width = env_usize(&env, "BANKTERM_PANEL_WIDTH")
            .or(file.panel_width)
            .unwrap_or(defaults.panel_width);

        // Bar width: file > default
        let bar_width = file.bar_width.unwrap_or(defaults.bar_width);

        Self {
            theme,
            ui_width: clamp_width("ui_width", ui_width, MIN_UI_WIDTH),
            panel_width: clamp_width("panel_width", panel_width, MIN_PANEL_WIDTH),
            bar_width: clamp_width("bar_width", bar_width, MIN_BAR_WIDTH),
            palette: file.palette.unwrap_or_default(),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Resolve the configured preset plus overrides into a palette
    pub fn palette(&self) -> Palette {
        Palette::resolve(&self.theme, &self.palette.overrides())
    }

    /// Write the default template to `path`. Existing files are kept unless
    /// `force` is set; returns whether a file was written.
    pub fn write_template(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Use Config::default().to_toml() as single source of truth
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(true)
    }
}

fn env_usize(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a width", key, raw);
            None
        }
    }
}

fn clamp_width(name: &str, value: usize, min: usize) -> usize {
    if value < min {
        tracing::warn!("{} = {} is below the minimum, using {}", name, value, min);
        min
    } else {
        value
    }
}
