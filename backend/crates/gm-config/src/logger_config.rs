use crate::{
    BYTES_PER_MIB, ConfigError, ConfigErrorResult, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MAX_FILES,
    DEFAULT_STDERR_PASSTHROUGH, LogLevel, LoggerConfigOverrides, default_log_path,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

/// Settings for a single log file and its rotation set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Primary log file; rotated copies live next to it as `<path>.N`
    pub log_path: PathBuf,
    /// Entries below this level are dropped before any I/O
    pub level: LogLevel,
    /// Rotate once the primary file has reached this size
    pub max_file_size_bytes: u64,
    /// Number of rotated files kept (`.1` through `.max_files`)
    pub max_files: usize,
    /// Mirror every entry to stderr as well as the file
    pub stderr_passthrough: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            level: LogLevel::default(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_MB * BYTES_PER_MIB,
            max_files: DEFAULT_MAX_FILES,
            stderr_passthrough: DEFAULT_STDERR_PASSTHROUGH,
        }
    }
}

impl LoggerConfig {
    /// Overlay the fields set in `overrides`, leaving the rest untouched.
    pub fn with_overrides(mut self, overrides: LoggerConfigOverrides) -> Self {
        if let Some(log_path) = overrides.log_path {
            self.log_path = log_path;
        }
        if let Some(level) = overrides.level {
            self.level = level;
        }
        if let Some(max_file_size_bytes) = overrides.max_file_size_bytes {
            self.max_file_size_bytes = max_file_size_bytes;
        }
        if let Some(max_files) = overrides.max_files {
            self.max_files = max_files;
        }
        if let Some(stderr_passthrough) = overrides.stderr_passthrough {
            self.stderr_passthrough = stderr_passthrough;
        }
        self
    }

    /// Check for values that make the logger useless.
    ///
    /// The logger never calls this itself; hosts that want to fail fast at
    /// startup can.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::logging("log_path must not be empty"));
        }

        if self.log_path.file_name().is_none() {
            return Err(ConfigError::logging(format!(
                "log_path must name a file: {}",
                self.log_path.display()
            )));
        }

        if self.max_file_size_bytes == 0 {
            return Err(ConfigError::logging(
                "max_file_size_bytes must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Path of the rotated file with the given suffix (`<path>.<index>`).
    pub fn rotated_path(&self, index: usize) -> PathBuf {
        let mut rotated = self.log_path.clone().into_os_string();
        rotated.push(format!(".{index}"));
        PathBuf::from(rotated)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!(
            "Logging to {} (level {}, rotate at {} bytes, keep {}, stderr: {})",
            self.log_path.display(),
            self.level,
            self.max_file_size_bytes,
            self.max_files,
            self.stderr_passthrough
        );
    }
}
