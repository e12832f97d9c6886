//! Test file loading and validation.
mod loader;
mod parse;
pub mod types;


pub use loader::{load_suite, load_test_file};
pub use parse::parse_suite;
