use crate::query::Query;

use super::RequestTarget;

/// Appended to the URI so the target sees a well-formed query tail.
pub const END_MARKER: &[u8] = b"&_";
/// Written after the request line to end the request.
pub const FRAME_TERMINATOR: &[u8] = b"\n\n";

/// Builds `METHOD PATH?k=v&...[&_] PROTOCOL` from the target and query.
///
/// Keys and values are copied verbatim; nothing is percent-encoded. A `?` is
/// added when there are parameters or the end marker is on, and a trailing
/// `&` is dropped before the marker is appended.
#[must_use]
pub fn build_request_line(target: &RequestTarget, params: &Query, end_marker: bool) -> Vec<u8> {
    let mut uri = target.path.as_bytes().to_vec();

    if !params.is_empty() || end_marker {
        uri.push(b'?');
    }
    for (key, value) in params {
        uri.extend_from_slice(key.as_bytes());
        uri.push(b'=');
        value.write_query(&mut uri);
        uri.push(b'&');
    }
    if uri.last() == Some(&b'&') {
        uri.pop();
    }
    if end_marker {
        uri.extend_from_slice(END_MARKER);
    }

    let mut line = Vec::with_capacity(
        target
            .method
            .len()
            .saturating_add(uri.len())
            .saturating_add(target.protocol.len())
            .saturating_add(2),
    );
    line.extend_from_slice(target.method.as_bytes());
    line.push(b' ');
    line.extend_from_slice(&uri);
    line.push(b' ');
    line.extend_from_slice(target.protocol.as_bytes());
    line
}
