mod log_entry;

use crate::{DiagnosticSink, LogLevel, LoggerConfig, LoggerConfigOverrides};

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Config pointing at `path` with mirroring off, independent of the environment
pub(crate) fn test_config(path: &Path, level: LogLevel) -> LoggerConfig {
    LoggerConfig::default().with_overrides(
        LoggerConfigOverrides::new()
            .log_path(path)
            .level(level)
            .stderr_passthrough(false),
    )
}

/// Every line of a log file parsed as JSON
pub(crate) fn read_entries(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

/// Rotated files currently present for `config`, checked up to `limit`
pub(crate) fn rotated_files(config: &LoggerConfig, limit: usize) -> Vec<PathBuf> {
    (1..=limit)
        .map(|index| config.rotated_path(index))
        .filter(|path| path.exists())
        .collect()
}

/// Sink that keeps mirrored lines in memory
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Sink whose every write fails
pub(crate) struct BrokenSink;

impl DiagnosticSink for BrokenSink {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stderr closed"))
    }
}
