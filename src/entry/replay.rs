use std::io::{BufRead, Write};

use clap::Parser;

use crate::args::ReplayArgs;
use crate::error::AppResult;
use crate::http::{SocketHttp, SocketOptions};
use crate::logger::init_logging;
use crate::logs::read_request_log;
use crate::replay::{ReplaySession, run_shell};

/// Entry point of the `httpfuzz-replay` binary.
///
/// # Errors
///
/// Returns an error when arguments or the request log are invalid, or when
/// the terminal cannot be read or written.
pub fn run_replay() -> AppResult<()> {
    let args = ReplayArgs::parse();
    init_logging(args.verbose, args.no_color);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    replay(&args, stdin.lock(), &mut stdout.lock())
}

/// Loads the request log and runs the replay shell until EOF.
///
/// # Errors
///
/// Returns an error when the request log cannot be read or decoded, or when
/// reading commands or writing output fails.
pub fn replay<I, O>(args: &ReplayArgs, input: I, output: &mut O) -> AppResult<()>
where
    I: BufRead,
    O: Write,
{
    let requests = read_request_log(&args.file)?;
    tracing::debug!(
        "Loaded {} request(s) from {}",
        requests.len(),
        args.file.display()
    );
    writeln!(output, "{} total requests.", requests.len())?;
    writeln!(output, "Type help for help. Ctrl-D to exit.")?;

    let mut sender = SocketHttp::new(
        args.host.clone(),
        SocketOptions {
            end_marker: false,
            with_response: args.response,
            dry_run: false,
        },
    );
    let mut session = ReplaySession::new(requests, &mut sender);
    run_shell(&mut session, input, output)?;
    Ok(())
}
