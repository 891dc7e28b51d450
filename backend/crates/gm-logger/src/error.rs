use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum LoggerError {
    #[error("Failed to {operation} {path}: {source} {location}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize log entry: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Failed to install logger: {message} {location}")]
    Install {
        message: String,
        location: ErrorLocation,
    },
}

impl LoggerError {
    /// Create an IO error for a file-system step on `path`
    #[track_caller]
    pub fn io(operation: &'static str, path: &Path, source: std::io::Error) -> Self {
        LoggerError::Io {
            operation,
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a serialization error
    #[track_caller]
    pub fn serialize(source: serde_json::Error) -> Self {
        LoggerError::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an install error
    #[track_caller]
    pub fn install<S: Into<String>>(message: S) -> Self {
        LoggerError::Install {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type LoggerErrorResult<T> = StdResult<T, LoggerError>;
