use crate::record::{LogRecord, LogType};
use crate::sink::{LogSink, SinkError};
use colored::{ColoredString, Colorize};

/// Console destination: one padded, delimited line per record, the whole
/// line colored by the record's type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

const DELIMITER: &str = " | ";

/// Render the uncolored console line for a record: timestamp, severity and
/// type padded to fixed widths, then the head.
pub fn render_line(record: &LogRecord) -> String {
    format!(
        "{:<23}{delim}{:<8}{delim}{:<11}{delim}{}",
        record.datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        record.severity.to_string(),
        record.kind.to_string(),
        record.head,
        delim = DELIMITER,
    )
}

fn colorize(line: String, kind: LogType) -> ColoredString {
    match kind {
        LogType::Success => line.green(),
        LogType::Information => line.cyan(),
        LogType::Warning => line.yellow(),
        LogType::Error => line.red(),
        LogType::Debug => line.magenta(),
    }
}

impl LogSink for ConsoleSink {
    /// Rendering has no failure mode that should abort emission; this
    /// always returns `Ok`.
    fn write(&self, record: &LogRecord) -> Result<(), SinkError> {
        println!("{}", colorize(render_line(record), record.kind));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Severity;
    use chrono::TimeZone;
    use chrono::Utc;

    fn record(kind: LogType, severity: Severity, head: &str) -> LogRecord {
        LogRecord {
            identifier: "id".into(),
            application: "test".into(),
            kind,
            severity,
            head: head.into(),
            body: None,
            datetime: Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap(),
            machine: "host".into(),
            user: "host\\tester".into(),
            call_stack: Vec::new(),
        }
    }

    #[test]
    fn line_is_padded_and_delimited() {
        let line = render_line(&record(LogType::Warning, Severity::Medium, "disk almost full"));
        assert_eq!(
            line,
            "2024-04-01 12:00:00.000 | Medium   | Warning     | disk almost full"
        );
    }

    #[test]
    fn long_fields_still_line_up() {
        let line = render_line(&record(LogType::Information, Severity::Critical, "x"));
        assert!(line.contains("Critical | Information | x"));
    }

    #[test]
    fn console_write_never_fails() {
        let sink = ConsoleSink;
        assert!(sink.write(&record(LogType::Debug, Severity::None, "probe")).is_ok());
    }
}
