use std::collections::BTreeMap;

use serde::Deserialize;

use crate::query::OperationConfig;

/// Top-level shape of a test file.
#[derive(Debug, Default, Deserialize)]
pub struct TestFile {
    pub tests: Vec<TestCaseConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestCaseConfig {
    pub name: String,
    pub description: Option<String>,
    pub path: String,
    pub method: Option<String>,
    pub protocol: Option<String>,
    pub num_requests: u64,
    #[serde(default)]
    pub query: BTreeMap<String, OperationConfig>,
}
