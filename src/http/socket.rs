use std::io::{Read, Write};
use std::net::TcpStream;

use crate::args::HostAddr;
use crate::error::TransportError;
use crate::query::Query;

use super::request::{FRAME_TERMINATOR, build_request_line};
use super::{RawSender, RequestSink, RequestTarget, Transport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SocketOptions {
    /// Append `&_` to every URI.
    pub end_marker: bool,
    /// Read the socket to EOF after sending.
    pub with_response: bool,
    /// Build and record requests without connecting.
    pub dry_run: bool,
}

/// One TCP connection per request, closed after the response (if any) is
/// drained.
pub struct SocketHttp<'sink> {
    host: HostAddr,
    options: SocketOptions,
    target: RequestTarget,
    sink: Option<&'sink mut dyn RequestSink>,
    last_request: Option<Vec<u8>>,
}

impl<'sink> SocketHttp<'sink> {
    #[must_use]
    pub fn new(host: HostAddr, options: SocketOptions) -> Self {
        SocketHttp {
            host,
            options,
            target: RequestTarget {
                path: "/".to_owned(),
                method: crate::suite::DEFAULT_METHOD.to_owned(),
                protocol: crate::suite::DEFAULT_PROTOCOL.to_owned(),
            },
            sink: None,
            last_request: None,
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: &'sink mut dyn RequestSink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn last_request(&self) -> Option<&[u8]> {
        self.last_request.as_deref()
    }
}

impl Transport for SocketHttp<'_> {
    fn set_target(&mut self, target: RequestTarget) {
        self.target = target;
    }

    fn fetch(&mut self, query: &Query) -> Result<Option<Vec<u8>>, TransportError> {
        let request = build_request_line(&self.target, query, self.options.end_marker);

        if let Some(sink) = self.sink.as_deref_mut() {
            sink.record(&request)
                .map_err(|source| TransportError::Record { source })?;
        }

        let result = if self.options.dry_run {
            tracing::debug!("Dry run: {}", request.escape_ascii());
            Ok(None)
        } else {
            self.send_request(&request)
        };
        self.last_request = Some(request);
        result
    }
}

impl RawSender for SocketHttp<'_> {
    fn send_request(&mut self, request: &[u8]) -> Result<Option<Vec<u8>>, TransportError> {
        let addr = self.host.to_string();
        let mut stream = TcpStream::connect((self.host.host.as_str(), self.host.port)).map_err(
            |source| TransportError::Connect {
                addr: addr.clone(),
                source,
            },
        )?;

        stream
            .write_all(request)
            .and_then(|()| stream.write_all(FRAME_TERMINATOR))
            .and_then(|()| stream.flush())
            .map_err(|source| TransportError::Send {
                addr: addr.clone(),
                source,
            })?;

        if !self.options.with_response {
            return Ok(None);
        }

        let mut response = Vec::new();
        stream
            .read_to_end(&mut response)
            .map_err(|source| TransportError::Receive { addr, source })?;
        Ok(Some(response))
    }
}
