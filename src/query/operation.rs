use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OperationError;

use super::value::FieldValue;

/// Step used by `inc` when none is configured.
const DEFAULT_STEP: i64 = 1;
/// Lower length bound used by the string operations when `min` is omitted.
const DEFAULT_MIN_LENGTH: i64 = 1;
/// Longest string the random string operations may produce (16 MiB).
pub const MAX_STRING_LENGTH: usize = 1 << 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Set,
    Inc,
    RandInt,
    RandStrAscii,
    RandStrAll,
    RandStrLetters,
    PrefixRandStrAscii,
}

impl OperationKind {
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Set,
        OperationKind::Inc,
        OperationKind::RandInt,
        OperationKind::RandStrAscii,
        OperationKind::RandStrAll,
        OperationKind::RandStrLetters,
        OperationKind::PrefixRandStrAscii,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKind::Set => "set",
            OperationKind::Inc => "inc",
            OperationKind::RandInt => "rand_int",
            OperationKind::RandStrAscii => "rand_str_ascii",
            OperationKind::RandStrAll => "rand_str_all",
            OperationKind::RandStrLetters => "rand_str_letters",
            OperationKind::PrefixRandStrAscii => "prefix_rand_str_ascii",
        }
    }

    /// Looks up an operation by its test-file name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation config exactly as written in a test file.
///
/// Every parameter is optional here; [`FieldSpec::try_from`] checks that the
/// ones the operation needs are present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OperationConfig {
    pub op: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl OperationConfig {
    #[must_use]
    pub fn new(op: &str) -> Self {
        OperationConfig {
            op: op.to_owned(),
            ..OperationConfig::default()
        }
    }

    /// JSON rendering used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("{:?} ({})", self, err))
    }
}

/// Closed integer range for `rand_int`, guaranteed non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    /// # Errors
    ///
    /// Returns an error when `max < min`.
    pub fn new(kind: OperationKind, min: i64, max: i64) -> Result<Self, OperationError> {
        if max < min {
            return Err(OperationError::InvalidBounds { op: kind, min, max });
        }
        Ok(IntRange { min, max })
    }

    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }
}

/// Closed range of string lengths, guaranteed non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// # Errors
    ///
    /// Returns an error when a bound is negative, `max < min`, or `max`
    /// exceeds [`MAX_STRING_LENGTH`].
    pub fn new(kind: OperationKind, min: i64, max: i64) -> Result<Self, OperationError> {
        if max < min {
            return Err(OperationError::InvalidBounds { op: kind, min, max });
        }
        let min_len = usize::try_from(min)
            .map_err(|_err| OperationError::NegativeLength { op: kind, value: min })?;
        let max_len = usize::try_from(max)
            .map_err(|_err| OperationError::NegativeLength { op: kind, value: max })?;
        if max_len > MAX_STRING_LENGTH {
            return Err(OperationError::LengthTooLarge {
                op: kind,
                value: max,
                limit: MAX_STRING_LENGTH,
            });
        }
        Ok(LengthRange {
            min: min_len,
            max: max_len,
        })
    }

    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    #[must_use]
    pub const fn contains(self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

/// Validated operation. Each variant carries only what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Set { value: FieldValue },
    Inc { step: i64 },
    RandInt { range: IntRange },
    RandStrAscii { length: LengthRange },
    RandStrAll { length: LengthRange },
    RandStrLetters { length: LengthRange },
    PrefixRandStrAscii { prefix: String, length: LengthRange },
}

impl Operation {
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Operation::Set { .. } => OperationKind::Set,
            Operation::Inc { .. } => OperationKind::Inc,
            Operation::RandInt { .. } => OperationKind::RandInt,
            Operation::RandStrAscii { .. } => OperationKind::RandStrAscii,
            Operation::RandStrAll { .. } => OperationKind::RandStrAll,
            Operation::RandStrLetters { .. } => OperationKind::RandStrLetters,
            Operation::PrefixRandStrAscii { .. } => OperationKind::PrefixRandStrAscii,
        }
    }
}

/// One query field: the seed used on the first iteration plus the operation
/// applied on every later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub initial: Option<FieldValue>,
    pub operation: Operation,
}

impl FieldSpec {
    #[must_use]
    pub fn seed(&self) -> FieldValue {
        self.initial.clone().unwrap_or_else(FieldValue::empty)
    }
}

impl TryFrom<&OperationConfig> for FieldSpec {
    type Error = OperationError;

    fn try_from(config: &OperationConfig) -> Result<Self, Self::Error> {
        let kind = OperationKind::from_name(&config.op).ok_or_else(|| {
            OperationError::UnknownOperation {
                op: config.op.clone(),
                config: config.describe(),
            }
        })?;
        let initial = config
            .initial
            .as_ref()
            .map(FieldValue::from_json)
            .transpose()?;

        let operation = match kind {
            OperationKind::Set => Operation::Set {
                value: require(kind, "initial", initial.clone())?,
            },
            OperationKind::Inc => Operation::Inc {
                step: config.step.unwrap_or(DEFAULT_STEP),
            },
            OperationKind::RandInt => {
                let min = require(kind, "min", config.min)?;
                let max = require(kind, "max", config.max)?;
                Operation::RandInt {
                    range: IntRange::new(kind, min, max)?,
                }
            }
            OperationKind::RandStrAscii => Operation::RandStrAscii {
                length: length_range(kind, config)?,
            },
            OperationKind::RandStrAll => Operation::RandStrAll {
                length: length_range(kind, config)?,
            },
            OperationKind::RandStrLetters => Operation::RandStrLetters {
                length: length_range(kind, config)?,
            },
            OperationKind::PrefixRandStrAscii => Operation::PrefixRandStrAscii {
                prefix: require(kind, "prefix", config.prefix.clone())?,
                length: length_range(kind, config)?,
            },
        };

        Ok(FieldSpec { initial, operation })
    }
}

fn require<T>(
    kind: OperationKind,
    param: &'static str,
    value: Option<T>,
) -> Result<T, OperationError> {
    value.ok_or(OperationError::MissingParameter { op: kind, param })
}

fn length_range(
    kind: OperationKind,
    config: &OperationConfig,
) -> Result<LengthRange, OperationError> {
    let max = require(kind, "max", config.max)?;
    LengthRange::new(kind, config.min.unwrap_or(DEFAULT_MIN_LENGTH), max)
}
