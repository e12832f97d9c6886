use crate::error::ConfigError;
use crate::query::{FieldDefinitions, FieldSpec};
use crate::suite::{DEFAULT_METHOD, DEFAULT_PROTOCOL, TestCase, TestSuite};

use super::types::{TestCaseConfig, TestFile};

/// Validates every test case of a parsed test file.
///
/// # Errors
///
/// Returns the first field whose operation config is invalid, naming the test
/// and the field.
pub fn parse_suite(file: TestFile) -> Result<TestSuite, ConfigError> {
    let cases = file
        .tests
        .into_iter()
        .map(parse_test_case)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TestSuite::new(cases))
}

fn parse_test_case(config: TestCaseConfig) -> Result<TestCase, ConfigError> {
    let mut fields = FieldDefinitions::new();
    for (field, op_config) in &config.query {
        let spec = FieldSpec::try_from(op_config).map_err(|source| ConfigError::InvalidField {
            test: config.name.clone(),
            field: field.clone(),
            source,
        })?;
        fields.insert(field.clone(), spec);
    }

    Ok(TestCase {
        name: config.name,
        description: config.description,
        path: config.path,
        method: config.method.unwrap_or_else(|| DEFAULT_METHOD.to_owned()),
        protocol: config.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_owned()),
        num_requests: config.num_requests,
        fields,
    })
}
