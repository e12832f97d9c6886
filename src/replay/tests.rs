use std::io::Cursor;

use super::*;
use crate::error::{AppError, AppResult, TransportError};
use crate::http::RawSender;

#[derive(Default)]
struct RecordingSender {
    sent: Vec<Vec<u8>>,
    fail_on: Option<usize>,
}

impl RawSender for RecordingSender {
    fn send_request(&mut self, request: &[u8]) -> Result<Option<Vec<u8>>, TransportError> {
        if self.fail_on == Some(self.sent.len()) {
            self.fail_on = None;
            return Err(TransportError::Connect {
                addr: "127.0.0.1:1".to_owned(),
                source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
            });
        }
        self.sent.push(request.to_vec());
        Ok(None)
    }
}

fn requests(count: u8) -> Vec<Vec<u8>> {
    (0..count)
        .map(|index| format!("GET /{} HTTP/1.1", index).into_bytes())
        .collect()
}

fn run(script: &str, sender: &mut RecordingSender, count: u8) -> AppResult<String> {
    let mut output = Vec::new();
    {
        let mut session = ReplaySession::new(requests(count), sender);
        run_shell(&mut session, Cursor::new(script.as_bytes()), &mut output)?;
    }
    String::from_utf8(output).map_err(|err| AppError::validation(format!("Invalid UTF-8: {}", err)))
}

fn expect_contains(output: &str, needle: &str) -> AppResult<()> {
    if !output.contains(needle) {
        return Err(AppError::validation(format!(
            "Expected '{}' in output:\n{}",
            needle, output
        )));
    }
    Ok(())
}

#[test]
fn n_sends_in_order_and_reports_progress() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let output = run("n\nn 2\n", &mut sender, 5)?;
    if sender.sent != requests(3) {
        return Err(AppError::validation(format!("Unexpected sends {:?}", sender.sent)));
    }
    expect_contains(&output, "Sent 1 requests. 4/5 left")?;
    expect_contains(&output, "Sent 2 requests. 2/5 left")
}

#[test]
fn n_stops_at_end_of_log() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let output = run("n 10\nn\n", &mut sender, 3)?;
    if sender.sent.len() != 3 {
        return Err(AppError::validation("Expected three sends"));
    }
    expect_contains(&output, "Sent 3 requests. 0/3 left")?;
    expect_contains(&output, "Sent 0 requests. 0/3 left")
}

#[test]
fn bare_number_and_empty_line_send_more() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let output = run("2\n\n", &mut sender, 6)?;
    if sender.sent.len() != 4 {
        return Err(AppError::validation(format!(
            "Expected four sends, got {}",
            sender.sent.len()
        )));
    }
    expect_contains(&output, "Sent 2 requests. 2/6 left")
}

#[test]
fn reset_starts_over() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    run("n 2\nr\nn\n", &mut sender, 3)?;
    let expected = vec![
        b"GET /0 HTTP/1.1".to_vec(),
        b"GET /1 HTTP/1.1".to_vec(),
        b"GET /0 HTTP/1.1".to_vec(),
    ];
    if sender.sent != expected {
        return Err(AppError::validation(format!("Unexpected sends {:?}", sender.sent)));
    }
    Ok(())
}

#[test]
fn print_shows_next_and_previous_without_sending() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let output = run("n 2\np 1\np -2\np -9\n", &mut sender, 4)?;
    if sender.sent.len() != 2 {
        return Err(AppError::validation("Print must not send"));
    }
    let printed: Vec<&str> = output
        .lines()
        .map(|line| line.trim_start_matches(PROMPT))
        .filter(|line| line.starts_with('\''))
        .collect();
    let expected = [
        "'GET /2 HTTP/1.1'",
        "'GET /0 HTTP/1.1'",
        "'GET /1 HTTP/1.1'",
        "'GET /0 HTTP/1.1'",
        "'GET /1 HTTP/1.1'",
    ];
    if printed != expected {
        return Err(AppError::validation(format!("Unexpected print {:?}", printed)));
    }
    Ok(())
}

#[test]
fn print_escapes_binary_bytes() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let mut output = Vec::new();
    {
        let mut session = ReplaySession::new(vec![vec![b'a', 0, 0xff]], &mut sender);
        session.print(1, &mut output)?;
    }
    if output != b"'a\\x00\\xff'\n" {
        return Err(AppError::validation(format!(
            "Unexpected output {}",
            output.escape_ascii()
        )));
    }
    Ok(())
}

#[test]
fn invalid_arguments_leave_cursor_alone() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let output = run("n abc\np xyz\nbogus\n", &mut sender, 2)?;
    if !sender.sent.is_empty() {
        return Err(AppError::validation("Nothing should be sent"));
    }
    expect_contains(&output, "Invalid argument abc, must be an integer")?;
    expect_contains(&output, "Invalid argument xyz. Integer expected.")?;
    expect_contains(&output, "Invalid argument bogus, must be an integer")
}

#[test]
fn failed_send_is_reported_and_retried() -> AppResult<()> {
    let mut sender = RecordingSender {
        sent: Vec::new(),
        fail_on: Some(1),
    };
    let output = run("n 3\nn 3\n", &mut sender, 3)?;
    expect_contains(&output, "Request 1 failed")?;
    expect_contains(&output, "Sent 1 requests. 2/3 left")?;
    expect_contains(&output, "Sent 2 requests. 0/3 left")?;
    if sender.sent != requests(3) {
        return Err(AppError::validation(format!("Unexpected sends {:?}", sender.sent)));
    }
    Ok(())
}

#[test]
fn help_lists_commands_and_details() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    let output = run("help\nhelp n\nhelp zz\n", &mut sender, 1)?;
    expect_contains(&output, "Available Commands:")?;
    expect_contains(&output, "EOF     Exit the command loop")?;
    expect_contains(&output, "r       Start over.")?;
    expect_contains(&output, "If no command is specified:")?;
    expect_contains(&output, "Accepts a positive integer argument")?;
    expect_contains(&output, "Pressing enter will repeat the previous command.")?;
    expect_contains(&output, "Command zz does not exist")
}

#[test]
fn eof_command_stops_reading() -> AppResult<()> {
    let mut sender = RecordingSender::default();
    run("EOF\nn\n", &mut sender, 2)?;
    if !sender.sent.is_empty() {
        return Err(AppError::validation("Commands after EOF must not run"));
    }
    Ok(())
}
