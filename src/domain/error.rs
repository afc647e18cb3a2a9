use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for snmpttctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Parameter file does not exist.
    #[error("Parameter file not found: {0}")]
    ParamsFileNotFound(PathBuf),

    /// Parameter file failed to decode: unknown key or wrong type.
    /// The message carries the offending parameter name.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A parameter requires another parameter that was absent or empty.
    #[error("Parameter '{parameter}' requires '{requires}' to be set and non-empty")]
    MissingDependentParameter { parameter: &'static str, requires: &'static str },

    /// A parameter decoded cleanly but its value is out of range.
    #[error("Invalid value for parameter '{parameter}': {reason}")]
    InvalidParameterValue { parameter: &'static str, reason: String },

    /// Platform name is not one of the supported operating systems.
    #[error("Unknown platform '{0}': must be one of centos, debian, ubuntu")]
    UnknownPlatform(String),

    /// Template rendering failure.
    #[error(transparent)]
    Template(#[from] minijinja::Error),

    /// External command (package manager, service manager) failure.
    #[error("Command '{command}' failed: {details}")]
    Command { command: String, details: String },
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        // Full rendering keeps the line/column snippet that names the key.
        AppError::InvalidParams(value.to_string())
    }
}
