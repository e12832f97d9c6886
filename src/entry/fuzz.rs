use std::io::Write;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::{FuzzArgs, default_output_path};
use crate::config::load_suite;
use crate::error::{AppError, AppResult};
use crate::http::{SocketHttp, SocketOptions};
use crate::logger::init_logging;
use crate::logs::RequestRecorder;
use crate::suite::{TestSelection, render_listing, run_suite};

/// Entry point of the `httpfuzz` binary.
///
/// # Errors
///
/// Returns an error when arguments, the test file or the request log are
/// invalid, or when a test fails.
pub fn run_fuzz() -> AppResult<()> {
    let args = FuzzArgs::parse();
    init_logging(args.verbose, args.no_color);
    let stdout = std::io::stdout();
    fuzz(&args, &mut stdout.lock())
}

/// Loads the test file and either lists it or runs the selected tests.
///
/// The request log is closed before a test failure is returned, so it stays
/// valid JSON either way.
///
/// # Errors
///
/// Returns an error when the test file or request log cannot be used, or
/// with the first failing test.
pub fn fuzz(args: &FuzzArgs, out: &mut dyn Write) -> AppResult<()> {
    let suite = load_suite(&args.testfile)?;

    if args.list {
        out.write_all(render_listing(&suite).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let selection = TestSelection::from_names(&args.tests);

    let output = args.output.clone().unwrap_or_else(default_output_path);
    let mut recorder = RequestRecorder::create(&output)?;
    recorder.start()?;
    tracing::info!("Recording requests to {}", output.display());

    let options = SocketOptions {
        end_marker: !args.no_end_marker,
        with_response: args.response,
        dry_run: args.dry,
    };
    let report = {
        let mut transport = SocketHttp::new(args.host.clone(), options).with_sink(&mut recorder);
        run_suite(&suite, &selection, &mut transport, &mut rng)
    };

    let recorded = recorder.count();
    drop(recorder.finish()?);
    tracing::info!(
        "Finished {} test(s), {} request(s) recorded to {}",
        report.completed.len(),
        recorded,
        output.display()
    );

    report.failure.map_or(Ok(()), |err| Err(AppError::suite(err)))
}
