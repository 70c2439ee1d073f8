use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a scene config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown record keyword `{keyword}` at line {line}")]
    UnknownKeyword { keyword: String, line: usize },
    #[error("`{record}` record at line {line} is missing its `{field}` field")]
    MissingField {
        record: &'static str,
        field: &'static str,
        line: usize,
    },
    #[error("`{record}` record: field `{field}` expects a number, got `{token}` at line {line}")]
    InvalidNumber {
        record: &'static str,
        field: &'static str,
        token: String,
        line: usize,
    },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
