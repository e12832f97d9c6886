use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Host must not be empty.")]
    EmptyHost,
    #[error("Invalid port in host '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
