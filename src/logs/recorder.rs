use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LogError;
use crate::http::RequestSink;

use super::records::LogRecord;

/// Streams records into a JSON array: `[` on start, one object per request,
/// `]` on finish.
///
/// Records are written as they arrive, so a run that stops early only needs
/// [`RequestRecorder::finish`] to leave valid JSON behind.
pub struct RequestRecorder<W: Write> {
    out: W,
    count: usize,
}

impl RequestRecorder<BufWriter<File>> {
    /// # Errors
    ///
    /// Returns an error when the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, LogError> {
        let file = File::create(path).map_err(|source| LogError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(RequestRecorder::new(BufWriter::new(file)))
    }
}

impl<W: Write> RequestRecorder<W> {
    pub const fn new(out: W) -> Self {
        RequestRecorder { out, count: 0 }
    }

    /// # Errors
    ///
    /// Returns an error when the opening bracket cannot be written.
    pub fn start(&mut self) -> Result<(), LogError> {
        self.out
            .write_all(b"[")
            .map_err(|source| LogError::Write { source })
    }

    /// Number of records written so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Closes the array, flushes, and hands back the writer.
    ///
    /// # Errors
    ///
    /// Returns an error when the closing bracket cannot be written or flushed.
    pub fn finish(mut self) -> Result<W, LogError> {
        self.out
            .write_all(b"]")
            .and_then(|()| self.out.flush())
            .map_err(|source| LogError::Write { source })?;
        Ok(self.out)
    }
}

impl<W: Write> RequestSink for RequestRecorder<W> {
    fn record(&mut self, request: &[u8]) -> Result<(), LogError> {
        if self.count > 0 {
            self.out
                .write_all(b",")
                .map_err(|source| LogError::Write { source })?;
        }
        serde_json::to_writer(&mut self.out, &LogRecord::encode(request))
            .map_err(|source| LogError::Encode { source })?;
        self.count = self.count.saturating_add(1);
        Ok(())
    }
}
