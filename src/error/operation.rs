use thiserror::Error;

use crate::query::OperationKind;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Invalid operation '{op}'. Config: {config}")]
    UnknownOperation { op: String, config: String },
    #[error("Operation '{op}' requires '{param}'.")]
    MissingParameter {
        op: OperationKind,
        param: &'static str,
    },
    #[error("Operation '{op}' has max {max} below min {min}.")]
    InvalidBounds {
        op: OperationKind,
        min: i64,
        max: i64,
    },
    #[error("Operation '{op}' length bound {value} must not be negative.")]
    NegativeLength { op: OperationKind, value: i64 },
    #[error("Operation '{op}' length bound {value} exceeds the limit of {limit}.")]
    LengthTooLarge {
        op: OperationKind,
        value: i64,
        limit: usize,
    },
    #[error("Unsupported initial value {value}. Use an integer or a string.")]
    UnsupportedInitial { value: String },
    #[error("Operation '{op}' expects an integer value, found {found}.")]
    TypeMismatch {
        op: OperationKind,
        found: &'static str,
    },
    #[error("Operation '{op}' overflowed adding {step} to {value}.")]
    IncrementOverflow {
        op: OperationKind,
        value: i64,
        step: i64,
    },
}

#[derive(Debug, Error)]
#[error("field '{field}': {source}")]
pub struct FieldError {
    pub field: String,
    #[source]
    pub source: OperationError,
}
