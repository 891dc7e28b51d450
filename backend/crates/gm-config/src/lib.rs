mod env_overrides;
mod error;
mod log_level;
mod logger_config;
mod logger_config_overrides;
mod paths;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logger_config::LoggerConfig;
pub use logger_config_overrides::LoggerConfigOverrides;
pub use paths::{default_log_path, expand_tilde, home_dir};

pub const ENV_LOG_PATH: &str = "GEMINI_MCP_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "GEMINI_MCP_LOG_LEVEL";
pub const ENV_LOG_MAX_SIZE_MB: &str = "GEMINI_MCP_LOG_MAX_SIZE_MB";
pub const ENV_LOG_MAX_FILES: &str = "GEMINI_MCP_LOG_MAX_FILES";

pub const DEFAULT_LOG_DIRECTORY: &str = ".gemini-mcp";
pub const DEFAULT_LOG_FILENAME: &str = "server.log";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;
pub const DEFAULT_MAX_FILES: usize = 3;
pub const DEFAULT_STDERR_PASSTHROUGH: bool = true;

pub const BYTES_PER_MIB: u64 = 1024 * 1024;
