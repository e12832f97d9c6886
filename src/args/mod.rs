//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{FuzzArgs, ReplayArgs};
pub use defaults::{DEFAULT_HOST, DEFAULT_REPLAY_FILE, DEFAULT_TEST_FILE, default_output_path};
pub use parsers::parse_host;
pub use types::HostAddr;
