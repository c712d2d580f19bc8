//! Timestamped, append-style log files.
//!
//! [`LogFile`] owns its handle for as long as it lives and releases it on
//! `close()` or on drop, whichever comes first.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("log file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("log file '{0}' is already closed")]
    Closed(PathBuf),
}

fn stamp(message: &str) -> String {
    format!("[{}] {message}", Local::now().format(TIMESTAMP_FORMAT))
}

pub struct LogFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl LogFile {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        tracing::debug!(path = %path.display(), "log file opened");
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.writer.is_none()
    }

    pub fn write_line(&mut self, message: &str) -> Result<(), JournalError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| JournalError::Closed(self.path.clone()))?;
        writeln!(writer, "{}", stamp(message))?;
        Ok(())
    }

    /// Flushes and releases the handle. Calling it again is a no-op.
    pub fn close(&mut self) -> Result<(), JournalError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            tracing::debug!(path = %self.path.display(), "log file closed");
        }
        Ok(())
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to flush log file on drop");
        }
    }
}

/// Opens `path` for append, writes one stamped line and lets the handle go.
pub fn append_line(path: impl AsRef<Path>, message: &str) -> Result<(), JournalError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    writeln!(file, "{}", stamp(message))?;
    Ok(())
}
