use crate::config::{self, keys, Configuration};
use crate::console::ConsoleSink;
use crate::file_sink::FileSink;
use crate::host;
use crate::record::{CallFrame, LogRecord, LogType};
use crate::sink::LogSink;
use chrono::Utc;
use std::path::PathBuf;

/// One emission request: the caller-controlled half of a [`LogRecord`].
/// Everything left `None` is resolved by the emitter from configuration,
/// category defaults, or the host environment.
#[derive(Debug, Clone)]
pub struct LogRequest {
    pub kind: LogType,
    pub head: String,
    pub body: Option<serde_json::Value>,
    pub severity: Option<crate::record::Severity>,
    pub identifier: Option<String>,
    pub application: Option<String>,
    pub directory: Option<PathBuf>,
    pub frames: Vec<CallFrame>,
}

impl LogRequest {
    pub fn new(kind: LogType, head: impl Into<String>) -> Self {
        LogRequest {
            kind,
            head: head.into(),
            body: None,
            severity: None,
            identifier: None,
            application: None,
            directory: None,
            frames: Vec::new(),
        }
    }

    pub fn success(head: impl Into<String>) -> Self {
        Self::new(LogType::Success, head)
    }

    /// "Info" and "Information" are the same category; this is the only
    /// constructor for both spellings.
    pub fn info(head: impl Into<String>) -> Self {
        Self::new(LogType::Information, head)
    }

    pub fn warning(head: impl Into<String>) -> Self {
        Self::new(LogType::Warning, head)
    }

    pub fn error(head: impl Into<String>) -> Self {
        Self::new(LogType::Error, head)
    }

    pub fn debug(head: impl Into<String>) -> Self {
        Self::new(LogType::Debug, head)
    }

    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn severity(mut self, severity: crate::record::Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Push one call-site frame, outermost first.
    pub fn frame(mut self, frame: CallFrame) -> Self {
        self.frames.push(frame);
        self
    }
}

/// Builds immutable [`LogRecord`]s from requests and dispatches them to the
/// configured sinks.
///
/// The configuration is injected at construction and owned by the emitter;
/// reads and last-writer-wins mutation go through [`config`] /
/// [`config_mut`]. Hosts mutating from several threads wrap the emitter in
/// their own lock.
///
/// Emission is fire-and-forget: a sink failure is reported once on the
/// `tracing` diagnostic channel and swallowed, and the constructed record is
/// never handed back to the caller.
///
/// [`config`]: Emitter::config
/// [`config_mut`]: Emitter::config_mut
#[derive(Debug, Default)]
pub struct Emitter {
    config: Configuration,
}

impl Emitter {
    pub fn new(config: Configuration) -> Self {
        Emitter { config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Build the record for `request` and hand it to the enabled sinks.
    ///
    /// An empty or whitespace-only `head` is rejected before any record is
    /// built or I/O attempted; the rejection is reported on the diagnostic
    /// channel and the call returns normally. File-sink failures are
    /// likewise downgraded to a diagnostic warning — the console line (when
    /// `ShowLogs` is on) is still rendered after a failed write.
    pub fn emit(&self, request: LogRequest) {
        if request.head.trim().is_empty() {
            tracing::warn!(kind = %request.kind, "log request rejected: empty head");
            return;
        }

        let directory = request.directory.clone().unwrap_or_else(|| {
            PathBuf::from(self.config.text(keys::LOG_PATH, config::DEFAULT_LOG_PATH))
        });
        let record = self.build_record(request);
        self.dispatch(&record, &FileSink::new(directory), &ConsoleSink);
    }

    /// Apply the `WriteLogs`/`ShowLogs` flags and forward the record to the
    /// enabled sinks, file first. The console sink runs regardless of the
    /// file sink's outcome.
    fn dispatch(&self, record: &LogRecord, file: &dyn LogSink, console: &dyn LogSink) {
        if self.config.flag(keys::WRITE_LOGS, true) {
            forward(file, record);
        }
        if self.config.flag(keys::SHOW_LOGS, true) {
            forward(console, record);
        }
    }

    pub fn success(&self, head: impl Into<String>) {
        self.emit(LogRequest::success(head));
    }

    pub fn info(&self, head: impl Into<String>) {
        self.emit(LogRequest::info(head));
    }

    pub fn warning(&self, head: impl Into<String>) {
        self.emit(LogRequest::warning(head));
    }

    pub fn error(&self, head: impl Into<String>) {
        self.emit(LogRequest::error(head));
    }

    pub fn debug(&self, head: impl Into<String>) {
        self.emit(LogRequest::debug(head));
    }

    fn build_record(&self, request: LogRequest) -> LogRecord {
        LogRecord {
            identifier: request
                .identifier
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            application: request.application.unwrap_or_else(|| {
                self.config
                    .text(keys::APPLICATION_NAME, config::DEFAULT_APPLICATION)
            }),
            severity: request
                .severity
                .unwrap_or_else(|| request.kind.default_severity()),
            kind: request.kind,
            head: request.head,
            body: request.body,
            datetime: Utc::now(),
            machine: host::machine_name(),
            user: host::user_identity(),
            call_stack: request.frames,
        }
    }
}

/// Dispatch one record to one sink, downgrading failure to a diagnostic
/// warning that names the record. Never propagates.
fn forward(sink: &dyn LogSink, record: &LogRecord) {
    if let Err(error) = sink.write(record) {
        tracing::warn!(
            identifier = %record.identifier,
            datetime = %record.datetime,
            "log sink write failed: {error}",
        );
    }
}
