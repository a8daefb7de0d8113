/// Structured logging for the climate alert service
///
/// Provides context-rich logging with component and city identifiers,
/// timestamps, and severity levels. Supports both console output
/// and file-based logging. Nothing is emitted until `init_logger`
/// has been called, so library consumers stay silent by default.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Fitter,
    Profiler,
    Predictor,
    Scorer,
    Config,
    Ingest,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Fitter => write!(f, "FIT"),
            Component::Profiler => write!(f, "PROFILE"),
            Component::Predictor => write!(f, "PREDICT"),
            Component::Scorer => write!(f, "RISK"),
            Component::Config => write!(f, "CONFIG"),
            Component::Ingest => write!(f, "INGEST"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        // A poisoned lock only means a previous writer panicked mid-log.
        let mut slot = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(logger);
    }

    fn format_entry(level: LogLevel, component: Component, subject: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let subject_part = subject.map(|s| format!(" [{}]", s)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, component, subject_part, message)
    }

    fn log(&self, level: LogLevel, component: Component, subject: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, component, subject, message);
        let subject_part = subject.map(|s| format!(" [{}]", s)).unwrap_or_default();

        // Console output goes to stderr so stdout stays clean for JSON.
        if self.console_timestamps {
            eprintln!("{}", log_entry);
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, subject_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, subject_part, message),
                LogLevel::Info => eprintln!("   {}", message),
                LogLevel::Debug => eprintln!("   [DEBUG] {}{}: {}", component, subject_part, message),
            }
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Minimum level of the active logger, or `None` before `init_logger`.
pub fn current_level() -> Option<LogLevel> {
    let guard = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    guard.as_ref().map(|logger| logger.min_level)
}

fn emit(level: LogLevel, component: Component, subject: Option<&str>, message: &str) {
    let guard = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(logger) = guard.as_ref() {
        logger.log(level, component, subject, message);
    }
}

/// Log a general informational message
pub fn info(component: Component, subject: Option<&str>, message: &str) {
    emit(LogLevel::Info, component, subject, message);
}

/// Log a warning message
pub fn warn(component: Component, subject: Option<&str>, message: &str) {
    emit(LogLevel::Warning, component, subject, message);
}

/// Log an error message
pub fn error(component: Component, subject: Option<&str>, message: &str) {
    emit(LogLevel::Error, component, subject, message);
}

/// Log a debug message
pub fn debug(component: Component, subject: Option<&str>, message: &str) {
    emit(LogLevel::Debug, component, subject, message);
}

// ---------------------------------------------------------------------------
// Batch Summary Logging
// ---------------------------------------------------------------------------

/// Log the outcome of a multi-city operation.
///
/// Everything kept logs at info, a partial result at warn, and an empty
/// result from a non-empty request at error.
pub fn log_batch_summary(component: Component, total: usize, kept: usize, skipped: usize) {
    let message = format!("{}/{} cities kept, {} skipped", kept, total, skipped);

    if skipped == 0 {
        info(component, None, &message);
    } else if kept == 0 {
        error(component, None, &message);
    } else {
        warn(component, None, &message);
    }
}
