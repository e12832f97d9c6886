//! Query-mutation engine.
//!
//! A test case declares one operation per query field. The evolver seeds the
//! query on the first iteration and then applies every field's operation to
//! its previous value on each following iteration.
mod evolver;
mod mutator;
mod operation;
mod value;


pub use evolver::{FieldDefinitions, Query, advance, seed_query};
pub use mutator::{Alphabet, apply, apply_config};
pub use operation::{
    FieldSpec, IntRange, LengthRange, MAX_STRING_LENGTH, Operation, OperationConfig,
    OperationKind,
};
pub use value::FieldValue;
