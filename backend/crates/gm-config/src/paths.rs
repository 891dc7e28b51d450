use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILENAME};

use std::path::PathBuf;

/// Current user's home directory.
pub fn home_dir() -> ConfigErrorResult<PathBuf> {
    dirs::home_dir().ok_or(ConfigError::NoHomeDir)
}

/// `~/.gemini-mcp/server.log`, or the same path relative to the working
/// directory when no home directory can be resolved.
pub fn default_log_path() -> PathBuf {
    let base = home_dir().unwrap_or_default();
    base.join(DEFAULT_LOG_DIRECTORY).join(DEFAULT_LOG_FILENAME)
}

/// Replace a leading `~` with the home directory.
///
/// Only the first character is considered, so `~/logs/a.log` and `~logs`
/// both expand. Without a resolvable home directory the input is kept as-is.
pub fn expand_tilde(raw: &str) -> PathBuf {
    let Some(rest) = raw.strip_prefix('~') else {
        return PathBuf::from(raw);
    };

    match home_dir() {
        Ok(home) => {
            let mut expanded = home.into_os_string();
            expanded.push(rest);
            PathBuf::from(expanded)
        }
        Err(_) => PathBuf::from(raw),
    }
}
