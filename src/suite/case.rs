use crate::http::RequestTarget;
use crate::query::FieldDefinitions;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_PROTOCOL: &str = "HTTP/1.1";

/// A named request shape plus the query mutations applied across its sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub description: Option<String>,
    pub path: String,
    pub method: String,
    pub protocol: String,
    pub num_requests: u64,
    pub fields: FieldDefinitions,
}

impl TestCase {
    #[must_use]
    pub fn target(&self) -> RequestTarget {
        RequestTarget {
            path: self.path.clone(),
            method: self.method.clone(),
            protocol: self.protocol.clone(),
        }
    }
}

/// Test cases in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    #[must_use]
    pub const fn new(cases: Vec<TestCase>) -> Self {
        TestSuite { cases }
    }

    #[must_use]
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cases.iter().any(|case| case.name == name)
    }
}
