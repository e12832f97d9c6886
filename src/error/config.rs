use std::path::PathBuf;

use super::OperationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read test file '{path}': {source}")]
    ReadTestFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON test file '{path}': {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse TOML test file '{path}': {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Test '{test}' field '{field}': {source}")]
    InvalidField {
        test: String,
        field: String,
        #[source]
        source: OperationError,
    },
}
