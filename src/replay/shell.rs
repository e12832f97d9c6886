use std::io::{self, BufRead, Write};

use super::commands::{self, Flow};
use super::session::ReplaySession;

pub const PROMPT: &str = "(Cmd) ";

/// Reads commands from `input` until `EOF` or end of input.
///
/// An empty line repeats the previous command; input that is not a command
/// name is passed to `n` as its argument.
///
/// # Errors
///
/// Returns an error when reading input or writing output fails.
pub fn run_shell<I, O>(
    session: &mut ReplaySession<'_>,
    mut input: I,
    mut output: O,
) -> io::Result<()>
where
    I: BufRead,
    O: Write,
{
    let mut line = String::new();
    let mut last_command = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            dispatch(session, "EOF", &mut output)?;
            return Ok(());
        }

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            trimmed.clone_into(&mut last_command);
        }
        if last_command.is_empty() {
            continue;
        }

        if dispatch(session, &last_command, &mut output)? == Flow::Exit {
            return Ok(());
        }
    }
}

fn dispatch(
    session: &mut ReplaySession<'_>,
    line: &str,
    output: &mut dyn Write,
) -> io::Result<Flow> {
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|arg| !arg.is_empty())),
        None => (line, None),
    };
    match commands::find(name) {
        Some(command) => (command.handler)(session, arg, output),
        None => commands::send_next(session, Some(line), output),
    }
}
