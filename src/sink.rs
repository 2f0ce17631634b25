use crate::record::LogRecord;
use std::io;
use std::path::PathBuf;

/// Destination for [`LogRecord`]s produced by the emitter.
///
/// Implementations transport a single record to a concrete destination
/// (per-day file, console, nothing). `write` is synchronous and blocking:
/// it runs to completion or failure on the calling thread, holds no state
/// across calls, and is never retried by the emitter.
pub trait LogSink {
    /// Deliver one record to the underlying destination.
    ///
    /// **Returns**
    /// - `Ok(())` if the record was accepted.
    /// - `Err(..)` if the destination failed. The emitter treats this as
    ///   non-fatal: it reports the failure on the diagnostic channel and
    ///   carries on — a sink failure never reaches the emitting caller.
    fn write(&self, record: &LogRecord) -> Result<(), SinkError>;
}

/// Failure surfaced by a sink. The directory-missing case is transient and
/// recovered inside the file sink; it never appears here.
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error("record could not be serialized")]
    Serialize(#[from] serde_json::Error),

    #[error("log directory {path} could not be created")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append record to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
