use std::path::PathBuf;

use clap::Parser;

use super::defaults::{DEFAULT_HOST, DEFAULT_REPLAY_FILE, DEFAULT_TEST_FILE};
use super::parsers::parse_host;
use super::types::HostAddr;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "httpfuzz",
    version,
    about = "Send fuzzed query strings to an HTTP server, driven by a declarative test file, and record every request sent."
)]
pub struct FuzzArgs {
    /// The HTTP host on which to run the tests
    #[arg(long, default_value = DEFAULT_HOST, env = "HTTPFUZZ_HOST", value_parser = parse_host)]
    pub host: HostAddr,

    /// Don't append &_ at the end of the URI
    #[arg(long = "no-end-marker")]
    pub no_end_marker: bool,

    /// Wait for the server to respond before sending the next request
    #[arg(long)]
    pub response: bool,

    /// File that contains the test cases (.json or .toml)
    #[arg(long, default_value = DEFAULT_TEST_FILE, env = "HTTPFUZZ_TESTFILE")]
    pub testfile: PathBuf,

    /// Comma separated list of test names (default: all)
    #[arg(long, value_delimiter = ',')]
    pub tests: Vec<String>,

    /// Dry run, build and record requests without sending them
    #[arg(long)]
    pub dry: bool,

    /// List test cases and exit
    #[arg(long)]
    pub list: bool,

    /// Request log file (default: fuzzy_requests_<timestamp>.json)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Seed for the random source, for reproducible runs
    #[arg(long, env = "HTTPFUZZ_SEED")]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "httpfuzz-replay",
    version,
    about = "Step through a recorded request log and resend its requests."
)]
pub struct ReplayArgs {
    /// HTTP server to which the requests are sent
    #[arg(long, default_value = DEFAULT_HOST, env = "HTTPFUZZ_HOST", value_parser = parse_host)]
    pub host: HostAddr,

    /// Request log to replay
    #[arg(long, default_value = DEFAULT_REPLAY_FILE)]
    pub file: PathBuf,

    /// Print the server response after each request
    #[arg(long)]
    pub response: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
