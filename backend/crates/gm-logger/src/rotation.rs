//! Size based rotation of a log file into `<path>.1` … `<path>.<max_files>`.
//!
//! ## Algorithm
//!
//! Before each append the primary file's current on-disk size is compared
//! with `max_file_size_bytes`. A missing primary never rotates. When the
//! threshold is reached:
//!
//! 1. `<path>.<max_files>` is deleted to make room
//! 2. `<path>.<i>` moves to `<path>.<i + 1>` for `i = max_files - 1 ..= 1`
//! 3. `<path>` moves to `<path>.1`
//!
//! The next append recreates `<path>`. Gaps in the history (for example only
//! `.1` present with `max_files = 3`) are normal: a missing source is
//! skipped, not reported. With `max_files = 0` nothing is retained and the
//! primary is deleted instead.
//!
//! Step 2 starts at the highest suffix actually present in the directory,
//! so the cost of a rotation follows the number of rotated files on disk
//! rather than `max_files`.
//!
//! ## Concurrency
//!
//! Nothing is locked. Two callers that both see an oversized file may both
//! rotate; the worst case is one extra, nearly empty rotated file.

use crate::{LoggerConfig, LoggerError, LoggerErrorResult};

use std::io::ErrorKind;
use std::path::Path;

/// Result of a rotation check. Step failures are collected, not raised.
#[derive(Debug)]
pub enum RotationOutcome {
    /// Primary missing or below the threshold
    NotNeeded,
    /// Every step succeeded (or had nothing to move)
    Rotated,
    /// Some steps failed; the rotation set is partially shifted
    Partial(Vec<LoggerError>),
}

/// Rotate when the primary file has reached the configured size.
pub fn rotate_if_needed(config: &LoggerConfig) -> RotationOutcome {
    let size = match std::fs::metadata(&config.log_path) {
        Ok(metadata) => metadata.len(),
        // Not created yet: the next append starts a fresh file
        Err(_) => return RotationOutcome::NotNeeded,
    };

    if size < config.max_file_size_bytes {
        return RotationOutcome::NotNeeded;
    }

    rotate(config)
}

/// Shift the rotation set unconditionally.
pub fn rotate(config: &LoggerConfig) -> RotationOutcome {
    let mut failures = Vec::new();

    if config.max_files == 0 {
        collect(remove_if_exists(&config.log_path), &mut failures);
        return finish(failures);
    }

    collect(
        remove_if_exists(&config.rotated_path(config.max_files)),
        &mut failures,
    );

    let highest = match highest_rotated_index(config) {
        Ok(highest) => highest,
        Err(e) => {
            failures.push(e);
            0
        }
    };

    for index in (1..=highest.min(config.max_files - 1)).rev() {
        collect(
            rename_if_exists(&config.rotated_path(index), &config.rotated_path(index + 1)),
            &mut failures,
        );
    }

    collect(
        rename_if_exists(&config.log_path, &config.rotated_path(1)),
        &mut failures,
    );

    finish(failures)
}

/// Largest `N` in `1..=max_files` for which `<path>.N` exists, or 0.
fn highest_rotated_index(config: &LoggerConfig) -> LoggerErrorResult<usize> {
    let Some(file_name) = config.log_path.file_name() else {
        return Ok(0);
    };
    let prefix = format!("{}.", file_name.to_string_lossy());
    let dir = match config.log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let entries = std::fs::read_dir(dir).map_err(|e| LoggerError::io("list", dir, e))?;

    let highest = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .strip_prefix(prefix.as_str())
                .and_then(|suffix| suffix.parse::<usize>().ok())
        })
        .filter(|index| (1..=config.max_files).contains(index))
        .max()
        .unwrap_or(0);

    Ok(highest)
}

fn collect(step: LoggerErrorResult<()>, failures: &mut Vec<LoggerError>) {
    if let Err(e) = step {
        failures.push(e);
    }
}

fn finish(failures: Vec<LoggerError>) -> RotationOutcome {
    if failures.is_empty() {
        RotationOutcome::Rotated
    } else {
        RotationOutcome::Partial(failures)
    }
}

fn remove_if_exists(path: &Path) -> LoggerErrorResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LoggerError::io("remove", path, e)),
    }
}

fn rename_if_exists(from: &Path, to: &Path) -> LoggerErrorResult<()> {
    match std::fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(LoggerError::io("rename", from, e)),
    }
}
