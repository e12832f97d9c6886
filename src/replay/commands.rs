use std::io::{self, Write};

use super::session::ReplaySession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Exit,
}

type Handler = fn(&mut ReplaySession<'_>, Option<&str>, &mut dyn Write) -> io::Result<Flow>;

pub(super) struct ShellCommand {
    pub(super) name: &'static str,
    /// Full help; the first line doubles as the summary.
    pub(super) help: &'static str,
    pub(super) handler: Handler,
}

impl ShellCommand {
    fn summary(&self) -> &'static str {
        self.help.lines().next().unwrap_or_default()
    }
}

pub(super) const COMMANDS: &[ShellCommand] = &[
    ShellCommand {
        name: "EOF",
        help: "Exit the command loop",
        handler: exit,
    },
    ShellCommand {
        name: "help",
        help: "Display the help",
        handler: help,
    },
    ShellCommand {
        name: "n",
        help: "Send the next request(s)\n\n\
               Accepts a positive integer argument: how many requests to send (default 1)",
        handler: send_next,
    },
    ShellCommand {
        name: "p",
        help: "Print n requests.\n\n\
               Accepts an integer argument (default 1); \
               negative values print the previous requests",
        handler: print,
    },
    ShellCommand {
        name: "r",
        help: "Start over.",
        handler: reset,
    },
];

/// Command used when the input does not name one.
pub(super) const DEFAULT_COMMAND: &str = "n";

pub(super) fn find(name: &str) -> Option<&'static ShellCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

fn exit(
    _session: &mut ReplaySession<'_>,
    _arg: Option<&str>,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    writeln!(out)?;
    Ok(Flow::Exit)
}

fn help(
    _session: &mut ReplaySession<'_>,
    arg: Option<&str>,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    if let Some(name) = arg {
        match find(name) {
            Some(command) => writeln!(out, "\n{}\n", command.help)?,
            None => writeln!(out, "Command {} does not exist", name)?,
        }
        return Ok(Flow::Continue);
    }

    let width = COMMANDS
        .iter()
        .map(|command| command.name.len())
        .max()
        .unwrap_or_default();
    writeln!(out, "\nAvailable Commands:")?;
    for command in COMMANDS {
        writeln!(
            out,
            "{:width$}    {}",
            command.name,
            command.summary(),
            width = width
        )?;
    }
    if let Some(default) = find(DEFAULT_COMMAND) {
        writeln!(out, "\nIf no command is specified:")?;
        for line in default.help.lines() {
            writeln!(out, "    {}", line)?;
        }
    }
    writeln!(out, "\nPressing enter will repeat the previous command.")?;
    Ok(Flow::Continue)
}

pub(super) fn send_next(
    session: &mut ReplaySession<'_>,
    arg: Option<&str>,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    match arg.map_or(Ok(1), str::parse::<usize>) {
        Ok(count) => session.send_next(count, out)?,
        Err(_err) => writeln!(
            out,
            "Invalid argument {}, must be an integer",
            arg.unwrap_or_default()
        )?,
    }
    Ok(Flow::Continue)
}

fn print(
    session: &mut ReplaySession<'_>,
    arg: Option<&str>,
    out: &mut dyn Write,
) -> io::Result<Flow> {
    match arg.map_or(Ok(1), str::parse::<i64>) {
        Ok(count) => session.print(count, out)?,
        Err(_err) => writeln!(
            out,
            "Invalid argument {}. Integer expected.",
            arg.unwrap_or_default()
        )?,
    }
    Ok(Flow::Continue)
}

fn reset(
    session: &mut ReplaySession<'_>,
    _arg: Option<&str>,
    _out: &mut dyn Write,
) -> io::Result<Flow> {
    session.reset();
    Ok(Flow::Continue)
}
