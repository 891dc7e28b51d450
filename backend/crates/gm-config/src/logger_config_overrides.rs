use crate::LogLevel;

use std::path::PathBuf;

/// Constructor-level overrides; `None` keeps the underlying default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfigOverrides {
    pub log_path: Option<PathBuf>,
    pub level: Option<LogLevel>,
    pub max_file_size_bytes: Option<u64>,
    pub max_files: Option<usize>,
    pub stderr_passthrough: Option<bool>,
}

impl LoggerConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(log_path.into());
        self
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn max_file_size_bytes(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = Some(bytes);
        self
    }

    pub fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = Some(max_files);
        self
    }

    pub fn stderr_passthrough(mut self, enabled: bool) -> Self {
        self.stderr_passthrough = Some(enabled);
        self
    }
}
