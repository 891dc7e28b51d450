use crate::{
    FIELD_LEVEL, FIELD_MESSAGE, FIELD_TIMESTAMP, LogFields, LogLevel, LoggerError,
    LoggerErrorResult,
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One log event, captured at the moment of the call.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    message: String,
    fields: LogFields,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, fields: LogFields) -> Self {
        Self::at(Utc::now(), level, message, fields)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        level: LogLevel,
        message: impl Into<String>,
        fields: LogFields,
    ) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            fields,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> &LogFields {
        &self.fields
    }

    /// Flat JSON object: base keys first, then the supplied fields overlaid.
    ///
    /// Overlaid keys that collide with a base key keep the base key's
    /// position but take the supplied value.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            FIELD_TIMESTAMP.to_string(),
            Value::String(self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert(
            FIELD_LEVEL.to_string(),
            Value::String(self.level.as_str().to_string()),
        );
        record.insert(
            FIELD_MESSAGE.to_string(),
            Value::String(self.message.clone()),
        );

        for (key, value) in self.fields.iter() {
            record.insert(key.clone(), value.clone());
        }

        record
    }

    /// Single JSON line terminated by `\n`.
    ///
    /// JSON string escaping turns embedded newlines into `\n` sequences, so
    /// the terminator is the only raw newline in the output.
    pub fn to_line(&self) -> LoggerErrorResult<String> {
        let mut line =
            serde_json::to_string(&self.to_record()).map_err(|e| LoggerError::serialize(e))?;
        line.push('\n');
        Ok(line)
    }
}

impl Serialize for LogEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}
