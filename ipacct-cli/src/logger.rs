//! Logging abstraction for testable output.
//!
//! Diagnostics never go to stdout (that stream carries the report). They go
//! through a `Logger`: stderr for the operator, an append-only file for
//! errors, or a capturing mock in tests.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Local, TimeZone};

/// Log level, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures (always shown)
    Error,
    /// Progress (-v flag)
    Info,
    /// Details (-vv flag)
    Debug,
}

impl Level {
    /// Create a level from the CLI `-v` count.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Level::Error,
            1 => Level::Info,
            _ => Level::Debug,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

/// Trait for logging output.
pub trait Logger: Send + Sync {
    /// Log a message at the given level.
    fn log(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
}

/// Logger that writes to stderr.
#[derive(Debug)]
pub struct StderrLogger {
    level: Level,
}

impl StderrLogger {
    /// Create a stderr logger showing messages up to `level`.
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: Level, message: &str) {
        if level <= self.level {
            let _ = writeln!(std::io::stderr(), "{}", message);
        }
    }
}

/// Format one log file record: `2026-10-19 03:04:05,026 [ERROR] message`.
pub fn format_record<Tz>(time: &DateTime<Tz>, level: Level, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} [{}] {}",
        time.format("%Y-%m-%d %H:%M:%S,%3f"),
        level.as_str(),
        message
    )
}

/// Logger that appends error records to a file.
///
/// The file is opened per record, so rotation by an external tool is safe.
/// Lower levels are dropped. If the file cannot be opened the record goes
/// to stderr instead.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLogger {
    fn log(&self, level: Level, message: &str) {
        if level > Level::Error {
            return;
        }

        let record = format_record(&Local::now(), level, message);
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", record));

        if let Err(e) = written {
            let _ = writeln!(
                std::io::stderr(),
                "cannot write log file {}: {}; {}",
                self.path.display(),
                e,
                record
            );
        }
    }
}

/// Logger that forwards every record to two loggers.
#[derive(Debug)]
pub struct TeeLogger<A, B> {
    first: A,
    second: B,
}

impl<A: Logger, B: Logger> TeeLogger<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Logger, B: Logger> Logger for TeeLogger<A, B> {
    fn log(&self, level: Level, message: &str) {
        self.first.log(level, message);
        self.second.log(level, message);
    }
}

/// Mock logger for testing that captures all messages.
#[derive(Debug, Clone, Default)]
pub struct MockLogger {
    messages: Arc<RwLock<Vec<LogEntry>>>,
}

/// A captured log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured log entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.messages.read().unwrap().clone()
    }

    /// Get messages at a specific level.
    pub fn messages_at_level(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    /// Check if any message contains the given substring.
    pub fn contains(&self, substring: &str) -> bool {
        self.entries().iter().any(|e| e.message.contains(substring))
    }
}

impl Logger for MockLogger {
    fn log(&self, level: Level, message: &str) {
        // Capture regardless of level so tests can see what would be logged.
        self.messages.write().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

/// A no-op logger that discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Level, _message: &str) {}
}
