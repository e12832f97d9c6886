use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "localhost:9080";
pub const DEFAULT_TEST_FILE: &str = "fuzz_test.json";
pub const DEFAULT_REPLAY_FILE: &str = "fuzzy_requests.log";
/// Port used when `--host` has none.
pub(crate) const DEFAULT_PORT: u16 = 80;

/// Timestamped request log name in the working directory.
#[must_use]
pub fn default_output_path() -> PathBuf {
    PathBuf::from(
        chrono::Local::now()
            .format("fuzzy_requests_%Y_%m_%d_%H_%M_%S.json")
            .to_string(),
    )
}
