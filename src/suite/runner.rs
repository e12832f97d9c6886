use rand::Rng;

use crate::error::SuiteError;
use crate::http::Transport;
use crate::query::{Query, advance};

use super::case::TestCase;

/// Sends `num_requests` requests for one test case.
///
/// The target is fixed on the transport once; each iteration advances the
/// query and dispatches a single request. Nothing is retried.
///
/// # Errors
///
/// Returns the first query or transport failure, tagged with the test name.
pub fn run_test<T, R>(case: &TestCase, transport: &mut T, rng: &mut R) -> Result<(), SuiteError>
where
    T: Transport + ?Sized,
    R: Rng + ?Sized,
{
    transport.set_target(case.target());

    let mut query = Query::new();
    for iteration in 0..case.num_requests {
        advance(&mut query, &case.fields, rng).map_err(|source| SuiteError::Field {
            test: case.name.clone(),
            source,
        })?;
        let response = transport
            .fetch(&query)
            .map_err(|source| SuiteError::Transport {
                test: case.name.clone(),
                iteration,
                source,
            })?;
        if let Some(response) = response {
            tracing::debug!(
                test = %case.name,
                iteration,
                bytes = response.len(),
                "Received response"
            );
        }
    }
    Ok(())
}
