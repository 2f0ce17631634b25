pub mod config;
pub mod console;
pub mod emitter;
pub mod file_sink;
pub mod host;
pub mod noop_sink;
pub mod record;
pub mod sink;

mod macros;

pub use config::Configuration;
pub use emitter::{Emitter, LogRequest};
pub use file_sink::FileSink;
pub use record::{CallFrame, LogRecord, LogType, Severity};
pub use sink::{LogSink, SinkError};
