//! Internal logging system for the stereo rig
//!
//! This module provides a flexible logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe global logger slot with RwLock
//! - File and line information for detailed ERROR logs

use chrono::{DateTime, Local};
use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

/// Logger trait for custom logging implementations
///
/// Implement this trait to route rig diagnostics elsewhere (file logging,
/// in-game console, test capture, etc.)
///
/// # Example
///
/// ```no_run
/// use stereo_rig::stereo::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "stereo::StereoRig", "stereo::StereoConfig")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Colors:
/// - Trace: bright black
/// - Debug: cyan
/// - Info: green
/// - Warn: yellow
/// - Error: red + bold
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        // Color severity string
        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        // Color source
        let source = entry.source.bright_blue();

        // Print with or without file:line
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== GLOBAL LOGGER =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Access the global logger slot, initializing it on first use
fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Set a custom logger
///
/// Replace the default logger with a custom implementation (file logger,
/// test capture logger, etc.)
///
/// # Example
///
/// ```no_run
/// use stereo_rig::stereo::log::{set_logger, Logger, LogEntry};
///
/// struct SilentLogger;
/// impl Logger for SilentLogger {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// set_logger(SilentLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(logger);
    }
}

/// Reset logger to default (DefaultLogger)
pub fn reset_logger() {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Internal logging method (for simple logs without file:line)
///
/// Used by macros like stereo_info!, stereo_warn!, etc.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if let Ok(lock) = logger_slot().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Internal logging method with file:line information (for ERROR logs)
///
/// Used by the stereo_error! macro to include source location.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(lock) = logger_slot().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// stereo_rig::stereo_trace!("stereo::StereoRig", "Entering compute_eye()");
/// ```
#[macro_export]
macro_rules! stereo_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// stereo_rig::stereo_debug!("stereo::StereoConfig", "Resolved convergence to {}", 1.95);
/// ```
#[macro_export]
macro_rules! stereo_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// stereo_rig::stereo_info!("stereo::StereoRig", "Rig created");
/// ```
#[macro_export]
macro_rules! stereo_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// stereo_rig::stereo_warn!("stereo::FrameState", "Degenerate pose, falling back to mono");
/// ```
#[macro_export]
macro_rules! stereo_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// stereo_rig::stereo_error!("stereo::StereoConfig", "Rejected config: {}", "near >= far");
/// ```
#[macro_export]
macro_rules! stereo_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
