use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::OperationError;

use super::operation::{FieldSpec, LengthRange, Operation, OperationConfig, OperationKind};
use super::value::FieldValue;

/// First byte of the printable alphabet (`$`).
const ASCII_FIRST: u8 = 36;
/// Last byte of the printable alphabet (`~`).
const ASCII_LAST: u8 = 126;
const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Byte sets the random string operations draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Code points 36 through 126.
    Ascii,
    /// ASCII upper and lower case letters.
    Letters,
    /// Every byte value, including non-printable ones.
    All,
}

impl Alphabet {
    pub fn sample<R>(self, rng: &mut R) -> u8
    where
        R: Rng + ?Sized,
    {
        match self {
            Alphabet::Ascii => rng.gen_range(ASCII_FIRST..=ASCII_LAST),
            Alphabet::Letters => LETTERS.choose(rng).copied().unwrap_or(b'a'),
            Alphabet::All => rng.gen_range(u8::MIN..=u8::MAX),
        }
    }

    #[must_use]
    pub const fn contains(self, byte: u8) -> bool {
        match self {
            Alphabet::Ascii => byte >= ASCII_FIRST && byte <= ASCII_LAST,
            Alphabet::Letters => byte.is_ascii_alphabetic(),
            Alphabet::All => true,
        }
    }
}

/// Produces the next value of a field from its current value.
///
/// # Errors
///
/// Returns an error when `inc` meets a non-integer value or overflows.
pub fn apply<R>(
    current: &FieldValue,
    operation: &Operation,
    rng: &mut R,
) -> Result<FieldValue, OperationError>
where
    R: Rng + ?Sized,
{
    match operation {
        Operation::Set { value } => Ok(value.clone()),
        Operation::Inc { step } => increment(current, *step),
        Operation::RandInt { range } => Ok(FieldValue::Int(
            rng.gen_range(range.min()..=range.max()),
        )),
        Operation::RandStrAscii { length } => Ok(FieldValue::Bytes(random_bytes(
            Alphabet::Ascii,
            *length,
            rng,
        ))),
        Operation::RandStrAll { length } => Ok(FieldValue::Bytes(random_bytes(
            Alphabet::All,
            *length,
            rng,
        ))),
        Operation::RandStrLetters { length } => Ok(FieldValue::Bytes(random_bytes(
            Alphabet::Letters,
            *length,
            rng,
        ))),
        Operation::PrefixRandStrAscii { prefix, length } => {
            let mut bytes = prefix.as_bytes().to_vec();
            bytes.extend(random_bytes(Alphabet::Letters, *length, rng));
            Ok(FieldValue::Bytes(bytes))
        }
    }
}

/// Validates a raw operation config and applies it in one step.
///
/// # Errors
///
/// Returns an error when the config names an unknown operation, misses a
/// required parameter, has inverted bounds, or when [`apply`] fails.
pub fn apply_config<R>(
    current: &FieldValue,
    config: &OperationConfig,
    rng: &mut R,
) -> Result<FieldValue, OperationError>
where
    R: Rng + ?Sized,
{
    let spec = FieldSpec::try_from(config)?;
    apply(current, &spec.operation, rng)
}

fn increment(current: &FieldValue, step: i64) -> Result<FieldValue, OperationError> {
    match current {
        FieldValue::Int(value) => value.checked_add(step).map(FieldValue::Int).ok_or(
            OperationError::IncrementOverflow {
                op: OperationKind::Inc,
                value: *value,
                step,
            },
        ),
        FieldValue::Bytes(_) => Err(OperationError::TypeMismatch {
            op: OperationKind::Inc,
            found: current.type_name(),
        }),
    }
}

fn random_bytes<R>(alphabet: Alphabet, length: LengthRange, rng: &mut R) -> Vec<u8>
where
    R: Rng + ?Sized,
{
    let len = rng.gen_range(length.min()..=length.max());
    (0..len).map(|_| alphabet.sample(rng)).collect()
}
