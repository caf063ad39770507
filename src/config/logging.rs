//! `[logging]` section
//!
//! Three sinks, each with its own settings:
//! - console: stderr, which shares the terminal with rendered output
//! - capture: the in-memory ring the dashboard log panel reads from
//! - file: optional JSON lines through a rolling appender (`[logging.file]`)

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Entries the capture sink keeps by default
pub const DEFAULT_CAPTURE_CAPACITY: usize = 200;

/// How often the log file is rolled over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, appended to forever
    Never,
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown rotation {:?}", other)),
        }
    }
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Lower-case name of a level filter, as written in the config file
pub fn level_name(level: LevelFilter) -> &'static str {
    match level.into_level() {
        None => "off",
        Some(tracing::Level::ERROR) => "error",
        Some(tracing::Level::WARN) => "warn",
        Some(tracing::Level::INFO) => "info",
        Some(tracing::Level::DEBUG) => "debug",
        Some(tracing::Level::TRACE) => "trace",
    }
}

/// File sink settings
#[derive(Debug, Clone, PartialEq)]
pub struct LogFile {
    pub enabled: bool,
    pub dir: PathBuf,
    pub rotation: LogRotation,
    /// File name prefix; the appender adds the date ("bankterm.2025-03-05")
    pub prefix: String,
}

impl Default for LogFile {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: PathBuf::from("./logs"),
            rotation: LogRotation::Daily,
            prefix: "bankterm".to_string(),
        }
    }
}

/// Effective logging settings. `RUST_LOG`, when set, replaces both levels.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Capture and file sinks
    pub level: LevelFilter,
    /// stderr sink
    pub console_level: LevelFilter,
    /// Most recent entries kept in memory (at least 1)
    pub capture_capacity: usize,
    pub file: LogFile,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
            console_level: LevelFilter::WARN,
            capture_capacity: DEFAULT_CAPTURE_CAPACITY,
            file: LogFile::default(),
        }
    }
}

/// `[logging]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub console_level: Option<String>,
    pub capture_capacity: Option<usize>,
    pub file: Option<FileLogFile>,
}

/// `[logging.file]` as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogFile {
    pub enabled: Option<bool>,
    pub dir: Option<String>,
    pub rotation: Option<String>,
    pub prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill unset or invalid file values from the defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: parse_or("logging.level", file.level, defaults.level),
            console_level: parse_or(
                "logging.console_level",
                file.console_level,
                defaults.console_level,
            ),
            capture_capacity: match file.capture_capacity {
                Some(0) => {
                    tracing::warn!("logging.capture_capacity = 0, keeping 1 entry");
                    1
                }
                Some(n) => n,
                None => defaults.capture_capacity,
            },
            file: LogFile::from_file(file.file.unwrap_or_default()),
        }
    }
}

impl LogFile {
    fn from_file(file: FileLogFile) -> Self {
        let defaults = Self::default();

        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            dir: file.dir.map(PathBuf::from).unwrap_or(defaults.dir),
            rotation: parse_or("logging.file.rotation", file.rotation, defaults.rotation),
            prefix: file.prefix.unwrap_or(defaults.prefix),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring {} = {:?}: {}", key, raw, e);
            default
        }
    }
}
