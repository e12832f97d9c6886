use std::collections::BTreeMap;

use rand::Rng;

use crate::error::FieldError;

use super::mutator::apply;
use super::operation::FieldSpec;
use super::value::FieldValue;

/// Field name to current value. Sorted, so request lines are reproducible.
pub type Query = BTreeMap<String, FieldValue>;

/// Field name to its seed and operation. Fixed for the lifetime of a test.
pub type FieldDefinitions = BTreeMap<String, FieldSpec>;

/// Builds the first query of a run: every field takes its `initial` value,
/// or the empty string when none is configured.
#[must_use]
pub fn seed_query(fields: &FieldDefinitions) -> Query {
    fields
        .iter()
        .map(|(name, spec)| (name.clone(), spec.seed()))
        .collect()
}

/// Moves `query` to its next state.
///
/// An empty query is seeded instead of mutated, so operations first run on the
/// second iteration of a test.
///
/// # Errors
///
/// Returns the first field whose operation fails; fields before it have
/// already been updated.
pub fn advance<R>(
    query: &mut Query,
    fields: &FieldDefinitions,
    rng: &mut R,
) -> Result<(), FieldError>
where
    R: Rng + ?Sized,
{
    if query.is_empty() {
        *query = seed_query(fields);
        return Ok(());
    }

    for (name, spec) in fields {
        match query.get_mut(name) {
            Some(current) => {
                *current = apply(current, &spec.operation, rng).map_err(|source| FieldError {
                    field: name.clone(),
                    source,
                })?;
            }
            None => {
                query.insert(name.clone(), spec.seed());
            }
        }
    }
    Ok(())
}
