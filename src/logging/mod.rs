// Logging module - subscriber setup and in-memory log capture
//
// Console logs go to stderr so they never interleave with rendered output
// on stdout. A capture layer keeps the most recent entries in a ring buffer
// so the demo can show them inside a panel; an optional JSON file layer
// writes through a non-blocking rolling appender.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{level_name, LogRotation, LoggingConfig, DEFAULT_CAPTURE_CAPACITY};

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS LEVEL message`, used for panel rows
    pub fn summary(&self) -> String {
        format!(
            "{} {:<5} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.as_str(),
            self.message
        )
    }
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPTURE_CAPACITY)
    }

    /// Buffer sized by `logging.capture_capacity`
    pub fn for_config(config: &LoggingConfig) -> Self {
        Self::with_capacity(config.capture_capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry to the buffer
    /// If the buffer is full, removes the oldest entry
    pub fn add(&self, entry: LogEntry) {
        let mut entries = self.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Get all log entries (most recent last)
    pub fn get_all(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// The `n` most recent entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let entries = self.lock();
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracing layer that captures events into a [`LogBuffer`]
pub struct CaptureLayer {
    buffer: LogBuffer,
}

impl CaptureLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        self.buffer.add(LogEntry {
            timestamp: Local::now(),
            level: LogLevel::from(metadata.level()),
            target: metadata.target().to_string(),
            message,
        });
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl<'a> tracing::field::Visit for MessageVisitor<'a> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.clear();
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Remove the quotes that Debug adds
            if self.0.len() >= 2 && self.0.starts_with('"') && self.0.ends_with('"') {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscriber setup
// ─────────────────────────────────────────────────────────────────────────────

/// Capture and file directive when RUST_LOG is unset
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("bankterm={}", level_name(config.level))
}

/// Console directive when RUST_LOG is unset
pub fn console_filter(config: &LoggingConfig) -> String {
    format!("bankterm={}", level_name(config.console_level))
}

/// RUST_LOG if set, otherwise `fallback`
fn filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
///
/// Precedence: RUST_LOG env var > config file > defaults (info captured,
/// warn on the console). `buffer` should come from [`LogBuffer::for_config`].
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the duration of the program.
pub fn init(config: &LoggingConfig, buffer: &LogBuffer) -> Option<WorkerGuard> {
    let level_filter = default_filter(config);

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_or(&console_filter(config)));

    let capture = CaptureLayer::new(buffer.clone()).with_filter(filter_or(&level_filter));

    // File layer uses JSON format for structured log parsing
    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter_or(&level_filter)),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(capture)
        .with(file_layer)
        .init();

    guard
}

fn file_writer(
    config: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let file = &config.file;
    if !file.enabled {
        return None;
    }

    // Subscriber isn't up yet, so this one goes straight to stderr
    if let Err(e) = std::fs::create_dir_all(&file.dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            file.dir, e
        );
        return None;
    }

    let file_appender = match file.rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(&file.dir, &file.prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(&file.dir, &file.prefix),
        LogRotation::Never => tracing_appender::rolling::never(&file.dir, &file.prefix),
    };

    // Writes happen in a background thread
    Some(tracing_appender::non_blocking(file_appender))
}
