//! Logging infrastructure for layoutfix.
//!
//! A process-wide file logger with level filtering. Messages can also be
//! echoed to stderr for `--verbose` runs. Logging before [`init`] is a
//! no-op, so library code never has to check whether a logger exists.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Global logger state
#[derive(Debug)]
struct Logger {
    /// Minimum log level to record
    min_level: LogLevel,
    /// Open log file, if it could be created
    file: Option<File>,
    /// Echo entries to stderr
    echo: bool,
}

impl Logger {
    fn new(file_path: PathBuf, min_level: LogLevel, echo: bool) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Truncate on startup
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .ok();
        if let Some(file) = file.as_mut() {
            let _ = writeln!(file, "=== layoutfix log start ===");
        }

        Self {
            min_level,
            file,
            echo,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let line = format_entry(&Local::now().format("%H:%M:%S").to_string(), level, message);
        if let Some(file) = self.file.as_mut() {
            let _ = writeln!(file, "{}", line);
        }
        if self.echo {
            eprintln!("{}", line);
        }
    }
}

fn format_entry(timestamp: &str, level: LogLevel, message: &str) -> String {
    format!("[{}] {}: {}", timestamp, level.to_str(), message)
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

fn log(level: LogLevel, message: &str) {
    if let Some(Ok(mut logger)) = LOGGER.get().map(Mutex::lock) {
        logger.add_entry(level, message);
    }
}

/// Initialize the global logger
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Path to the log file, truncated on start
/// * `min_level` - Minimum log level to record
/// * `echo` - Also write entries to stderr
pub fn init(file_path: PathBuf, min_level: LogLevel, echo: bool) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level, echo)));
}

/// Log a debug message
pub fn debug(message: impl AsRef<str>) {
    log(LogLevel::Debug, message.as_ref());
}

/// Log an informational message
pub fn info(message: impl AsRef<str>) {
    log(LogLevel::Info, message.as_ref());
}

/// Log a warning message
pub fn warn(message: impl AsRef<str>) {
    log(LogLevel::Warn, message.as_ref());
}

/// Log an error message
pub fn error(message: impl AsRef<str>) {
    log(LogLevel::Error, message.as_ref());
}
