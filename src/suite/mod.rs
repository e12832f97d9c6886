//! Test cases and the loop that drives them against a transport.
mod case;
mod driver;
mod listing;
mod runner;


pub use case::{DEFAULT_METHOD, DEFAULT_PROTOCOL, TestCase, TestSuite};
pub use driver::{SuiteReport, TestSelection, run_suite};
pub use listing::render_listing;
pub use runner::run_test;
