#![allow(dead_code)]

use gm_config::{ENV_LOG_LEVEL, ENV_LOG_MAX_FILES, ENV_LOG_MAX_SIZE_MB, ENV_LOG_PATH};

use std::env;
use std::path::Path;

use serde_json::Value;

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Unset every GEMINI_MCP_LOG_* variable for the lifetime of the guards
pub fn clear_logger_env() -> Vec<EnvGuard> {
    [
        ENV_LOG_PATH,
        ENV_LOG_LEVEL,
        ENV_LOG_MAX_SIZE_MB,
        ENV_LOG_MAX_FILES,
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

/// Every line of a log file parsed as JSON
pub fn read_entries(path: &Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
