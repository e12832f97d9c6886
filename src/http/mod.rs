//! Raw-socket HTTP transport.
//!
//! Requests are a single request line written byte for byte, so fuzzed query
//! values reach the server exactly as generated, including bytes that no
//! regular HTTP client would put on the wire.
mod request;
mod socket;


pub use request::{END_MARKER, FRAME_TERMINATOR, build_request_line};
pub use socket::{SocketHttp, SocketOptions};

use crate::error::{LogError, TransportError};
use crate::query::Query;

/// Fixed part of every request sent for a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub path: String,
    pub method: String,
    pub protocol: String,
}

/// Builds and dispatches one request per query.
pub trait Transport {
    fn set_target(&mut self, target: RequestTarget);

    /// Sends the request for `query`, returning the raw response when one
    /// was requested.
    ///
    /// # Errors
    ///
    /// Returns an error when recording, connecting, sending or receiving
    /// fails.
    fn fetch(&mut self, query: &Query) -> Result<Option<Vec<u8>>, TransportError>;
}

/// Sends pre-built request bytes, as read back from a request log.
pub trait RawSender {
    /// # Errors
    ///
    /// Returns an error when connecting, sending or receiving fails.
    fn send_request(&mut self, request: &[u8]) -> Result<Option<Vec<u8>>, TransportError>;
}

/// Receives every request the transport builds, before it is sent.
pub trait RequestSink {
    /// # Errors
    ///
    /// Returns an error when the request cannot be stored.
    fn record(&mut self, request: &[u8]) -> Result<(), LogError>;
}

impl<F> RequestSink for F
where
    F: FnMut(&[u8]) -> Result<(), LogError>,
{
    fn record(&mut self, request: &[u8]) -> Result<(), LogError> {
        self(request)
    }
}
