use serde_json::Value;
use std::collections::BTreeMap;

/// Well-known configuration keys. Keys are case-sensitive and none of them
/// is required; every read supplies its own fallback.
pub mod keys {
    /// Schema version of the configuration store itself.
    pub const VERSION: &str = "Version";

    /// Render emitted records to the console sink. Defaults to `true`.
    pub const SHOW_LOGS: &str = "ShowLogs";

    /// Persist emitted records through the file sink. Defaults to `true`.
    pub const WRITE_LOGS: &str = "WriteLogs";

    /// Directory the file sink writes per-day files into.
    pub const LOG_PATH: &str = "LogPath";

    /// Application name stamped on records that don't carry their own.
    pub const APPLICATION_NAME: &str = "ApplicationName";
}

/// Directory used when neither the request nor the store names one.
pub const DEFAULT_LOG_PATH: &str = "./logs";

/// Application name used when neither the request nor the store names one.
pub const DEFAULT_APPLICATION: &str = "unclog";

/// Mutable key/value store for process-wide logging behavior.
///
/// Absent keys are never an error; reads fall back to a caller-supplied
/// default. The store performs no synchronization of its own — concurrent
/// writers are last-writer-wins, and hosts that mutate from several threads
/// must synchronize externally.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    values: BTreeMap<String, Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(keys::VERSION.to_string(), Value::from(env!("CARGO_PKG_VERSION")));
        values.insert(keys::SHOW_LOGS.to_string(), Value::from(true));
        values.insert(keys::WRITE_LOGS.to_string(), Value::from(true));
        values.insert(keys::LOG_PATH.to_string(), Value::from(DEFAULT_LOG_PATH));
        values.insert(keys::APPLICATION_NAME.to_string(), Value::from(DEFAULT_APPLICATION));
        Configuration { values }
    }
}

impl Configuration {
    /// An entirely empty store, no defaults. Reads fall through to their
    /// fallbacks until keys are set.
    pub fn empty() -> Self {
        Configuration { values: BTreeMap::new() }
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value stored under `key`, or `default` when the key is absent.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Value {
        self.values.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Boolean read with fallback. A stored value of a non-boolean type
    /// also falls back to `default`.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// String read with fallback, same non-matching-type rule as [`flag`].
    ///
    /// [`flag`]: Configuration::flag
    pub fn text(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    /// Upsert a single key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Replace the whole store in one assignment. No merging with the
    /// previous contents.
    pub fn set_all(&mut self, values: BTreeMap<String, Value>) {
        self.values = values;
    }

    /// Read-only view of the current contents.
    pub fn all(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}
