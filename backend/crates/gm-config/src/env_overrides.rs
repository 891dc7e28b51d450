use crate::{
    BYTES_PER_MIB, ENV_LOG_LEVEL, ENV_LOG_MAX_FILES, ENV_LOG_MAX_SIZE_MB, ENV_LOG_PATH,
    LogLevel, LoggerConfig, LoggerConfigOverrides, expand_tilde,
};

use std::path::PathBuf;

impl LoggerConfig {
    /// Build the configuration from defaults and `GEMINI_MCP_LOG_*` variables.
    pub fn from_env() -> Self {
        Self::load(LoggerConfigOverrides::default())
    }

    /// Build the configuration in layers.
    ///
    /// Loading order:
    /// 1. Built-in defaults
    /// 2. Explicit `overrides` from the caller
    /// 3. `GEMINI_MCP_LOG_*` environment variables
    ///
    /// Each layer only replaces the fields it sets. Malformed variables are
    /// ignored and never produce an error.
    pub fn load(overrides: LoggerConfigOverrides) -> Self {
        let mut config = Self::default().with_overrides(overrides);
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_path(ENV_LOG_PATH, &mut self.log_path);
        Self::apply_env_level(ENV_LOG_LEVEL, &mut self.level);

        if let Some(mb) = Self::env_positive(ENV_LOG_MAX_SIZE_MB)
            && let Some(bytes) = mb.checked_mul(BYTES_PER_MIB)
        {
            self.max_file_size_bytes = bytes;
        }

        if let Some(count) = Self::env_positive(ENV_LOG_MAX_FILES)
            && let Ok(count) = usize::try_from(count)
        {
            self.max_files = count;
        }
    }

    /// Helper: Read a variable, treating unset and empty the same way
    fn env_value(var_name: &str) -> Option<String> {
        std::env::var(var_name).ok().filter(|val| !val.is_empty())
    }

    /// Helper: Apply environment variable override for paths (expands leading `~`)
    fn apply_env_path(var_name: &str, target: &mut PathBuf) {
        if let Some(val) = Self::env_value(var_name) {
            *target = expand_tilde(&val);
        }
    }

    /// Helper: Apply environment variable override for the level.
    ///
    /// Only the exact lowercase names are accepted; `"ERROR"` or `" warn"`
    /// leave the target untouched.
    fn apply_env_level(var_name: &str, target: &mut LogLevel) {
        if let Some(val) = Self::env_value(var_name)
            && let Some(level) = LogLevel::ALL.into_iter().find(|l| l.as_str() == val)
        {
            *target = level;
        }
    }

    /// Helper: Read the leading positive integer of a variable.
    ///
    /// Leading whitespace and a `+` sign are skipped and parsing stops at the
    /// first non-digit, so `"5MB"` is 5 and `"1.5"` is 1. No digits, zero, a
    /// negative sign or overflow give `None`.
    fn env_positive(var_name: &str) -> Option<u64> {
        let val = Self::env_value(var_name)?;
        let unsigned = val.trim_start();
        let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);
        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());

        unsigned[..digits_end]
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
    }
}
