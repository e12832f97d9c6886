use thiserror::Error;

use super::{
    ConfigError, FieldError, LogError, OperationError, SuiteError, TransportError,
    ValidationError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),
    #[error("Query error: {0}")]
    Field(#[from] FieldError),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Request log error: {0}")]
    Log(#[from] LogError),
    #[error("Suite error: {0}")]
    Suite(#[from] SuiteError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn suite<E>(error: E) -> Self
    where
        E: Into<SuiteError>,
    {
        error.into().into()
    }
}
