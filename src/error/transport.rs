use thiserror::Error;

use super::LogError;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to send request to {addr}: {source}")]
    Send {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read response from {addr}: {source}")]
    Receive {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to record request: {source}")]
    Record {
        #[source]
        source: LogError,
    },
}
