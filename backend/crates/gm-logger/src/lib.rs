//! Append-only JSON-lines logger with size based rotation.
//!
//! Every call runs level filter, stderr mirror, directory check, rotation
//! check and append, in that order, and then returns. Nothing in the write
//! path can fail the caller: I/O errors end inside [`Logger::log`].

mod diagnostic_sink;
mod error;
mod file_writer;
mod log_bridge;
mod log_entry;
mod log_fields;
mod logger;
mod prompt;
mod request_id;
mod rotation;

#[cfg(test)]
mod tests;

pub use diagnostic_sink::{DiagnosticSink, StderrSink};
pub use error::{LoggerError, LoggerErrorResult};
pub use log_entry::LogEntry;
pub use log_fields::LogFields;
pub use logger::Logger;
pub use prompt::{truncate_prompt, truncate_prompt_to};
pub use request_id::generate_request_id;
pub use rotation::{RotationOutcome, rotate, rotate_if_needed};

pub use gm_config::{LogLevel, LoggerConfig, LoggerConfigOverrides};

pub const FIELD_TIMESTAMP: &str = "timestamp";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_REQUEST_ID: &str = "requestId";
pub const FIELD_TOOL: &str = "tool";
pub const FIELD_MODEL: &str = "model";
pub const FIELD_PROMPT_PREVIEW: &str = "promptPreview";
pub const FIELD_DURATION_MS: &str = "durationMs";
pub const FIELD_TOKEN_COUNT: &str = "tokenCount";
pub const FIELD_INPUT_TOKENS: &str = "inputTokens";
pub const FIELD_OUTPUT_TOKENS: &str = "outputTokens";
pub const FIELD_FINISH_REASON: &str = "finishReason";
pub const FIELD_ERROR: &str = "error";
pub const FIELD_TARGET: &str = "target";

pub const DEFAULT_PROMPT_PREVIEW_LEN: usize = 100;
pub const TRUNCATION_MARKER: &str = "...";
