use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event category. `"Info"` is accepted as a parse alias of
/// [`LogType::Information`] but is never emitted as its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogType {
    Success,
    #[serde(alias = "Info")]
    Information,
    Warning,
    Error,
    Debug,
}

impl LogType {
    /// Severity applied when the caller does not pick one explicitly.
    pub fn default_severity(self) -> Severity {
        match self {
            LogType::Debug => Severity::None,
            LogType::Success | LogType::Information => Severity::Low,
            LogType::Warning => Severity::Medium,
            LogType::Error => Severity::High,
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogType::Success => "Success",
            LogType::Information => "Information",
            LogType::Warning => "Warning",
            LogType::Error => "Error",
            LogType::Debug => "Debug",
        };
        f.write_str(name)
    }
}

impl FromStr for LogType {
    type Err = UnknownLogType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Success" => Ok(LogType::Success),
            "Information" | "Info" => Ok(LogType::Information),
            "Warning" => Ok(LogType::Warning),
            "Error" => Ok(LogType::Error),
            "Debug" => Ok(LogType::Debug),
            other => Err(UnknownLogType(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("unknown log type: {0}")]
pub struct UnknownLogType(pub String);

/// Escalation level, independent of the event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        f.write_str(name)
    }
}

/// One call-site frame, outermost caller first in [`LogRecord::call_stack`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallFrame {
    pub component: String,
    pub file: String,
    pub line: u32,
}

/// One structured log entry.
///
/// A record is fully populated at construction and never mutated or reused
/// afterwards; sinks only ever see `&LogRecord`. Serializes to the on-disk
/// line format: one flat JSON object with PascalCase keys, `Body` omitted
/// when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogRecord {
    pub identifier: String,
    pub application: String,
    #[serde(rename = "Type")]
    pub kind: LogType,
    pub severity: Severity,
    pub head: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    #[serde(serialize_with = "serialize_datetime")]
    pub datetime: DateTime<Utc>,
    pub machine: String,
    pub user: String,
    pub call_stack: Vec<CallFrame>,
}

/// Always write fractional seconds and the `Z` designator, even for
/// whole-second datetimes.
fn serialize_datetime<S: serde::Serializer>(
    datetime: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::Micros, true))
}
