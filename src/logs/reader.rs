use std::path::Path;

use crate::error::LogError;

use super::records::LogRecord;

/// Loads a request log and decodes every payload.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not a JSON array of
/// records, or holds a payload that is not valid base64.
pub fn read_request_log(path: &Path) -> Result<Vec<Vec<u8>>, LogError> {
    let content = std::fs::read(path).map_err(|source| LogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<LogRecord> =
        serde_json::from_slice(&content).map_err(|source| LogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    decode_records(&records)
}

/// Decodes a request log held in memory.
///
/// # Errors
///
/// Returns an error when the content is not a JSON array of records or holds
/// a payload that is not valid base64.
pub fn parse_request_log(content: &[u8]) -> Result<Vec<Vec<u8>>, LogError> {
    let records: Vec<LogRecord> =
        serde_json::from_slice(content).map_err(|source| LogError::Malformed { source })?;
    decode_records(&records)
}

fn decode_records(records: &[LogRecord]) -> Result<Vec<Vec<u8>>, LogError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.decode(index))
        .collect()
}
