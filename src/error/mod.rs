mod app;
mod config;
mod log;
mod operation;
mod suite;
mod transport;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use log::LogError;
pub use operation::{FieldError, OperationError};
pub use suite::SuiteError;
pub use transport::TransportError;
pub use validation::ValidationError;
