use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// One entry of the request log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogRecord {
    /// Raw request bytes, base64 encoded since random fields may hold any
    /// byte value.
    pub request: String,
}

impl LogRecord {
    #[must_use]
    pub fn encode(request: &[u8]) -> Self {
        LogRecord {
            request: STANDARD.encode(request),
        }
    }

    /// Decodes the payload. Surrounding whitespace is ignored, so logs whose
    /// payloads end in a newline still load.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is not valid base64.
    pub fn decode(&self, index: usize) -> Result<Vec<u8>, LogError> {
        STANDARD
            .decode(self.request.trim())
            .map_err(|source| LogError::Decode { index, source })
    }
}
