#![no_main]

use httpfuzz::config::parse_suite;
use httpfuzz::config::types::TestFile;
use httpfuzz::query::{advance, Query};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_ITERATIONS: u64 = 8;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<TestFile> = match data.split_first() {
        Some((selector, rest)) if selector % 2 == 0 => serde_json::from_slice(rest).ok(),
        Some((_, rest)) => std::str::from_utf8(rest)
            .ok()
            .and_then(|text| toml::from_str(text).ok()),
        None => None,
    };
    let Some(file) = parsed else {
        return;
    };
    let Ok(suite) = parse_suite(file) else {
        return;
    };

    let mut rng = StdRng::seed_from_u64(0);
    for case in suite.cases() {
        let mut query = Query::new();
        for _ in 0..case.num_requests.min(MAX_ITERATIONS) {
            if advance(&mut query, &case.fields, &mut rng).is_err() {
                break;
            }
            debug_assert!(query.keys().all(|name| case.fields.contains_key(name)));
        }
    }
});
