use crate::record::LogRecord;
use crate::sink::{LogSink, SinkError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File extension of the per-day log files.
pub const FILE_EXTENSION: &str = "unclog";

/// Append-only file destination. One file per UTC calendar day inside the
/// target directory, one JSON object per line.
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        FileSink { directory: directory.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl LogSink for FileSink {
    fn write(&self, record: &LogRecord) -> Result<(), SinkError> {
        append(&self.directory, record)
    }
}

/// Path of the file a record lands in: `directory/<YYYY-MM-DD>.unclog`,
/// keyed by the record's own UTC datetime, not the wall clock.
pub fn target_path(directory: &Path, record: &LogRecord) -> PathBuf {
    let day = record.datetime.format("%Y-%m-%d");
    directory.join(format!("{}.{}", day, FILE_EXTENSION))
}

/// Durably append one record as a single JSON line to its per-day file.
///
/// The write is attempted without checking that `directory` exists; when the
/// open fails with not-found, the directory is created (parents included)
/// and the open-and-write is retried exactly once. Any other open or write
/// failure surfaces as [`SinkError::Write`] without a retry. The file handle
/// is scoped to this call — flushed and closed on every path, success or
/// error, and never cached across calls.
///
/// Concurrent appends to the same file are only as safe as the platform's
/// append-mode semantics; no per-file locking is added, so line-level
/// atomicity under concurrency is whatever a single append write provides.
pub fn append(directory: &Path, record: &LogRecord) -> Result<(), SinkError> {
    let path = target_path(directory, record);
    let line = serde_json::to_string(record)?;

    match append_line(&path, &line) {
        Ok(()) => Ok(()),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(directory).map_err(|source| SinkError::DirectoryCreate {
                path: directory.to_path_buf(),
                source,
            })?;
            append_line(&path, &line).map_err(|source| SinkError::Write { path, source })
        }
        Err(source) => Err(SinkError::Write { path, source }),
    }
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()
}
