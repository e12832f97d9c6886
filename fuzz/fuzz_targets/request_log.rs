#![no_main]

use httpfuzz::http::RequestSink;
use httpfuzz::logs::{parse_request_log, RequestRecorder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(requests) = parse_request_log(data) else {
        return;
    };

    let mut recorder = RequestRecorder::new(Vec::new());
    if recorder.start().is_err() {
        return;
    }
    for request in &requests {
        if recorder.record(request).is_err() {
            return;
        }
    }
    if let Ok(encoded) = recorder.finish() {
        debug_assert_eq!(parse_request_log(&encoded).ok(), Some(requests));
    }
});
