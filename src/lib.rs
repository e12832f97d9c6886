//! Core library for the `httpfuzz` and `httpfuzz-replay` CLIs.
//!
//! A test file declares, per test case, a request target and one operation
//! per query field. Each iteration mutates the query, writes a raw request
//! line to the server and appends the exact bytes to a request log, which
//! the replay shell can later step through. The binaries are the primary
//! interface; library APIs may change with them.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod logs;
pub mod query;
pub mod replay;
pub mod suite;
