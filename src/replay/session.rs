use std::io::{self, Write};

use crate::http::RawSender;

/// Replay state: the decoded requests and a cursor into them.
pub struct ReplaySession<'sender> {
    requests: Vec<Vec<u8>>,
    sender: &'sender mut dyn RawSender,
    cursor: usize,
}

impl<'sender> ReplaySession<'sender> {
    pub fn new(requests: Vec<Vec<u8>>, sender: &'sender mut dyn RawSender) -> Self {
        ReplaySession {
            requests,
            sender,
            cursor: 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total().saturating_sub(self.cursor)
    }

    /// Sends up to `count` requests from the cursor.
    ///
    /// A failed send is reported and ends the batch; the cursor stays on the
    /// failed request so it can be retried.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to `out` fails.
    pub fn send_next(&mut self, count: usize, out: &mut dyn Write) -> io::Result<()> {
        let end = self.cursor.saturating_add(count).min(self.total());
        let mut sent = 0_usize;
        while self.cursor < end {
            let Some(request) = self.requests.get(self.cursor) else {
                break;
            };
            match self.sender.send_request(request) {
                Ok(Some(response)) => writeln!(out, "{}", response.escape_ascii())?,
                Ok(None) => {}
                Err(err) => {
                    tracing::error!("Request {} failed: {}", self.cursor, err);
                    writeln!(out, "Request {} failed: {}", self.cursor, err)?;
                    break;
                }
            }
            self.cursor = self.cursor.saturating_add(1);
            sent = sent.saturating_add(1);
        }
        writeln!(
            out,
            "Sent {} requests. {}/{} left",
            sent,
            self.remaining(),
            self.total()
        )
    }

    pub const fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Prints `count` requests after the cursor, or `|count|` before it when
    /// negative. Positions outside the log are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to `out` fails.
    pub fn print(&self, count: i64, out: &mut dyn Write) -> io::Result<()> {
        let span = usize::try_from(count.unsigned_abs()).unwrap_or(usize::MAX);
        let (start, end) = if count >= 0 {
            (self.cursor, self.cursor.saturating_add(span))
        } else {
            (self.cursor.saturating_sub(span), self.cursor)
        };
        let end = end.min(self.total());
        for request in self.requests.get(start..end).unwrap_or_default() {
            writeln!(out, "'{}'", request.escape_ascii())?;
        }
        Ok(())
    }
}
