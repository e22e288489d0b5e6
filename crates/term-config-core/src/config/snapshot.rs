//! Read-only settings tree

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The document root is not a key/value mapping
    #[error("Configuration root must be a table, found {found}")]
    NotATable { found: &'static str },
}

/// Nested settings mapping as handed over by the host.
///
/// Paths are dotted key sequences such as `terminal.integrated.fontFamily`.
/// A leaf counts as unset when it is absent, `null`, or an empty string;
/// every lookup helper returns `None` for all three.
///
/// Input may be nested (`{"terminal": {"integrated": {"fontSize": 12}}}`),
/// flat with dotted keys (`{"terminal.integrated.fontSize": 12}`), or a mix
/// of both; dotted keys are expanded into tables on construction. Keys that
/// contain a literal `.` therefore cannot be addressed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigurationSnapshot {
    root: Map<String, Value>,
}

impl ConfigurationSnapshot {
    /// Create an empty snapshot (every path unset)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an already-parsed JSON tree, expanding dotted keys.
    ///
    /// `null` is accepted as an empty snapshot.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(entries) => {
                let mut snapshot = Self::default();
                for (key, child) in entries {
                    snapshot.merge(&key, child);
                }
                Ok(snapshot)
            }
            Value::Null => Ok(Self::default()),
            other => Err(ConfigError::NotATable {
                found: json_type_name(&other),
            }),
        }
    }

    /// Parse a JSON settings document
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_value(value)
    }

    /// Parse a TOML settings document into the same tree shape as JSON
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(contents)?;
        let value = serde_json::to_value(table)?;
        Self::from_value(value)
    }

    /// Deep-merge `value` at `path`: tables are merged key by key, anything
    /// else replaces what is there.
    fn merge(&mut self, path: &str, value: Value) {
        match value {
            Value::Object(entries) if !entries.is_empty() => {
                for (key, child) in entries {
                    self.merge(&format!("{path}.{key}"), child);
                }
            }
            Value::Object(_) if self.lookup(path).is_some() => {}
            leaf => self.set(path, leaf),
        }
    }

    /// Set `path` to `value`, creating intermediate tables as needed.
    ///
    /// A non-table value sitting on an intermediate segment is replaced.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let mut segments = path.split('.').peekable();
        let mut table = &mut self.root;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                table.insert(segment.to_string(), value.into());
                return;
            }
            let entry = table
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            let Value::Object(next) = entry else {
                return;
            };
            table = next;
        }
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    /// Raw value at `path`, unset sentinels included
    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Look up a set value at `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.lookup(path).filter(|value| !is_unset(value))
    }

    /// Look up a string value at `path`.
    ///
    /// A value of another type is reported and treated as unset.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        let value = self.get(path)?;
        match value.as_str() {
            Some(s) => Some(s),
            None => {
                warn!(path, found = json_type_name(value), "expected a string setting, ignoring");
                None
            }
        }
    }

    /// Look up a numeric value at `path`.
    ///
    /// A value of another type is reported and treated as unset.
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        let value = self.get(path)?;
        match value.as_f64() {
            Some(n) => Some(n),
            None => {
                warn!(path, found = json_type_name(value), "expected a numeric setting, ignoring");
                None
            }
        }
    }

    /// True when no top-level section is present
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl<'de> Deserialize<'de> for ConfigurationSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "table",
    }
}
