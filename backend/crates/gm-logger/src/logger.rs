use crate::diagnostic_sink::{DiagnosticSink, StderrSink};
use crate::file_writer::{append_line, ensure_parent_dir};
use crate::rotation::rotate_if_needed;
use crate::{LogEntry, LogFields, LogLevel, LoggerConfig, LoggerConfigOverrides, LoggerErrorResult};

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Structured file logger.
///
/// Construct one per process and pass it to whatever needs it. The logger
/// holds no open file; each call opens, appends and closes.
///
/// # Failure model
///
/// Log calls never return errors and never panic. Below-threshold calls do
/// nothing at all. For the rest, every file-system step yields a
/// [`LoggerErrorResult`] that is dropped in [`Logger::log`], so a full disk,
/// a missing directory or a read-only path costs the entry and nothing else.
pub struct Logger {
    config: LoggerConfig,
    directory_ensured: AtomicBool,
    mirror: Box<dyn DiagnosticSink>,
}

impl Logger {
    /// Logger mirroring to stderr when `config.stderr_passthrough` is set.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, StderrSink)
    }

    /// Logger using built-in defaults plus `overrides`, ignoring the environment.
    pub fn with_overrides(overrides: LoggerConfigOverrides) -> Self {
        Self::new(LoggerConfig::default().with_overrides(overrides))
    }

    /// Logger configured from `GEMINI_MCP_LOG_*` variables.
    pub fn from_env() -> Self {
        Self::new(LoggerConfig::from_env())
    }

    /// Logger mirroring to `sink` instead of stderr.
    pub fn with_sink(config: LoggerConfig, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            config,
            directory_ensured: AtomicBool::new(false),
            mirror: Box::new(sink),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.config.level.permits(level)
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message, LogFields::new());
    }

    pub fn debug_with(&self, message: impl AsRef<str>, fields: LogFields) {
        self.log(LogLevel::Debug, message, fields);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message, LogFields::new());
    }

    pub fn info_with(&self, message: impl AsRef<str>, fields: LogFields) {
        self.log(LogLevel::Info, message, fields);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message, LogFields::new());
    }

    pub fn warn_with(&self, message: impl AsRef<str>, fields: LogFields) {
        self.log(LogLevel::Warn, message, fields);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message, LogFields::new());
    }

    pub fn error_with(&self, message: impl AsRef<str>, fields: LogFields) {
        self.log(LogLevel::Error, message, fields);
    }

    /// Filter, mirror and persist one entry.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>, fields: LogFields) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message.as_ref(), fields);

        // Nothing to mirror or persist if the entry cannot be encoded
        let Ok(line) = entry.to_line() else {
            return;
        };

        if self.config.stderr_passthrough {
            // Mirror failures are dropped and do not affect the file write
            let _ = self.mirror.write_line(&line);
        }

        // Persistence failures end here; the caller never sees them
        let _ = self.persist(&line);
    }

    /// Directory, rotation, append.
    ///
    /// Only the append decides the result. A directory failure surfaces again
    /// as an append failure, and a failed rotation still lets the line land
    /// in whichever file is now at the primary path.
    fn persist(&self, line: &str) -> LoggerErrorResult<()> {
        let _ = self.ensure_directory();
        let _ = rotate_if_needed(&self.config);
        append_line(&self.config.log_path, line)
    }

    /// Create the log directory once; failures are retried on the next call.
    fn ensure_directory(&self) -> LoggerErrorResult<()> {
        if self.directory_ensured.load(Ordering::Relaxed) {
            return Ok(());
        }

        ensure_parent_dir(&self.config.log_path)?;
        self.directory_ensured.store(true, Ordering::Relaxed);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn directory_ensured(&self) -> bool {
        self.directory_ensured.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("directory_ensured", &self.directory_ensured)
            .finish_non_exhaustive()
    }
}
