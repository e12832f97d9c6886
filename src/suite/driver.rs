use std::collections::BTreeSet;

use rand::Rng;

use crate::error::SuiteError;
use crate::http::Transport;

use super::case::TestSuite;
use super::runner::run_test;

/// Which test cases of a suite to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSelection {
    All,
    Named(BTreeSet<String>),
}

impl TestSelection {
    /// Builds a selection from `--tests` values; no names selects everything.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: BTreeSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            TestSelection::All
        } else {
            TestSelection::Named(names)
        }
    }

    #[must_use]
    pub fn includes(&self, name: &str) -> bool {
        match self {
            TestSelection::All => true,
            TestSelection::Named(names) => names.contains(name),
        }
    }

    /// Selected names that the suite does not define.
    #[must_use]
    pub fn unknown_names<'suite>(&'suite self, suite: &TestSuite) -> Vec<&'suite str> {
        match self {
            TestSelection::All => Vec::new(),
            TestSelection::Named(names) => names
                .iter()
                .filter(|name| !suite.contains(name))
                .map(String::as_str)
                .collect(),
        }
    }
}

/// Outcome of a suite run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub completed: Vec<String>,
    pub failure: Option<SuiteError>,
}

impl SuiteReport {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Runs the selected test cases in file order.
///
/// The first failing test is logged and stops the run; it is returned in the
/// report rather than as an error so the caller can still close its outputs.
pub fn run_suite<T, R>(
    suite: &TestSuite,
    selection: &TestSelection,
    transport: &mut T,
    rng: &mut R,
) -> SuiteReport
where
    T: Transport + ?Sized,
    R: Rng + ?Sized,
{
    for name in selection.unknown_names(suite) {
        tracing::warn!("Test '{}' is not defined in the test file", name);
    }

    let mut report = SuiteReport::default();
    for case in suite
        .cases()
        .iter()
        .filter(|case| selection.includes(&case.name))
    {
        tracing::info!("Running test {}", case.name);
        match run_test(case, transport, rng) {
            Ok(()) => report.completed.push(case.name.clone()),
            Err(err) => {
                tracing::error!("{}", err);
                report.failure = Some(err);
                break;
            }
        }
    }
    report
}
