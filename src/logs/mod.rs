//! Request log: every request the generator builds, as a JSON array of
//! base64-encoded payloads.
mod reader;
mod recorder;
mod records;


pub use reader::{parse_request_log, read_request_log};
pub use recorder::RequestRecorder;
pub use records::LogRecord;
