use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};
use crate::suite::TestSuite;

use super::parse::parse_suite;
use super::types::TestFile;

/// Reads and validates a test file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or when any
/// field's operation config is invalid.
pub fn load_suite(path: &Path) -> AppResult<TestSuite> {
    let file = load_test_file(path)?;
    let suite = parse_suite(file).map_err(AppError::config)?;
    tracing::debug!(
        "Loaded {} test case(s) from {}",
        suite.len(),
        path.display()
    );
    Ok(suite)
}

/// Reads a test file without validating operations.
///
/// Files ending in `.toml` are parsed as TOML, anything else as JSON.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_test_file(path: &Path) -> AppResult<TestFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadTestFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(_) | None => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
    }
}
