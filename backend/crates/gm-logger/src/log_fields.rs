use crate::{
    FIELD_DURATION_MS, FIELD_ERROR, FIELD_FINISH_REASON, FIELD_INPUT_TOKENS, FIELD_MODEL,
    FIELD_OUTPUT_TOKENS, FIELD_PROMPT_PREVIEW, FIELD_REQUEST_ID, FIELD_TOKEN_COUNT, FIELD_TOOL,
    truncate_prompt,
};

use std::fmt::Display;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

/// Optional context attached to a log entry.
///
/// Keys keep insertion order and are written verbatim next to the base
/// `timestamp`/`level`/`message` keys. A key that collides with a base key
/// replaces its value, so `with("message", ..)` overrides the positional
/// message. Fields that were never set are simply absent from the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogFields(Map<String, Value>);

impl LogFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any serializable value under `key`.
    ///
    /// A value that cannot be represented as JSON is skipped; building
    /// fields is part of a log call and must not fail it.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.0.insert(key.into(), value);
        }
        self
    }

    pub fn request_id(self, request_id: impl Into<String>) -> Self {
        self.with(FIELD_REQUEST_ID, request_id.into())
    }

    pub fn tool(self, tool: impl Into<String>) -> Self {
        self.with(FIELD_TOOL, tool.into())
    }

    pub fn model(self, model: impl Into<String>) -> Self {
        self.with(FIELD_MODEL, model.into())
    }

    /// Stores the prompt already shortened by [`truncate_prompt`].
    pub fn prompt_preview(self, prompt: &str) -> Self {
        self.with(FIELD_PROMPT_PREVIEW, truncate_prompt(prompt))
    }

    pub fn duration_ms(self, millis: u64) -> Self {
        self.with(FIELD_DURATION_MS, millis)
    }

    pub fn duration(self, elapsed: Duration) -> Self {
        let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.duration_ms(millis)
    }

    pub fn token_count(self, tokens: u64) -> Self {
        self.with(FIELD_TOKEN_COUNT, tokens)
    }

    pub fn input_tokens(self, tokens: u64) -> Self {
        self.with(FIELD_INPUT_TOKENS, tokens)
    }

    pub fn output_tokens(self, tokens: u64) -> Self {
        self.with(FIELD_OUTPUT_TOKENS, tokens)
    }

    pub fn finish_reason(self, reason: impl Into<String>) -> Self {
        self.with(FIELD_FINISH_REASON, reason.into())
    }

    pub fn error(self, error: impl Display) -> Self {
        self.with(FIELD_ERROR, error.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for LogFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
