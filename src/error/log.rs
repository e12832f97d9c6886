use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to create request log '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write request log: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode request record: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read request log '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse request log '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed request log: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
    #[error("Request {index} is not valid base64: {source}")]
    Decode {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },
}
