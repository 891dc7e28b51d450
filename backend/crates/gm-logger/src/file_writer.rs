use crate::{LoggerError, LoggerErrorResult};

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Ensure the parent directory of a path exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> LoggerErrorResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir)
            .map_err(|e| LoggerError::io("create directory", dir, e))?;
    }
    Ok(())
}

/// Append one line, opening and closing the file around the write.
///
/// No handle outlives the call, so a crash between writes cannot leave one
/// half-used.
pub(crate) fn append_line(path: &Path, line: &str) -> LoggerErrorResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::io("open", path, e))?;

    file.write_all(line.as_bytes())
        .map_err(|e| LoggerError::io("append to", path, e))
}
