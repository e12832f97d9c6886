use thiserror::Error;

use super::{FieldError, TransportError};

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Test '{test}' failed on {source}")]
    Field {
        test: String,
        #[source]
        source: FieldError,
    },
    #[error("Test '{test}' failed on request {iteration}: {source}")]
    Transport {
        test: String,
        iteration: u64,
        #[source]
        source: TransportError,
    },
}

impl SuiteError {
    #[must_use]
    pub fn test_name(&self) -> &str {
        match self {
            SuiteError::Field { test, .. } | SuiteError::Transport { test, .. } => test,
        }
    }
}
