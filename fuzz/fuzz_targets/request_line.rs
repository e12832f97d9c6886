#![no_main]

use httpfuzz::http::{build_request_line, RequestTarget, END_MARKER};
use httpfuzz::query::{FieldValue, Query};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((flags, rest)) = data.split_first() else {
        return;
    };
    let end_marker = flags % 2 == 0;

    let mut query = Query::new();
    for (index, chunk) in rest.split(|byte| *byte == b'&').enumerate() {
        let value = if index % 2 == 0 {
            FieldValue::Bytes(chunk.to_vec())
        } else {
            FieldValue::Int(i64::from(chunk.first().copied().unwrap_or_default()))
        };
        query.insert(format!("f{}", index), value);
    }

    let target = RequestTarget {
        path: "/fuzz".to_owned(),
        method: "GET".to_owned(),
        protocol: "HTTP/1.1".to_owned(),
    };
    let line = build_request_line(&target, &query, end_marker);
    debug_assert!(line.starts_with(b"GET /fuzz"));
    debug_assert!(line.ends_with(b" HTTP/1.1"));

    let uri_end = line.len().saturating_sub(b" HTTP/1.1".len());
    let uri = line.get(..uri_end).unwrap_or_default();
    if end_marker {
        debug_assert!(uri.ends_with(END_MARKER));
    } else {
        debug_assert!(!uri.ends_with(b"&"));
    }
});
