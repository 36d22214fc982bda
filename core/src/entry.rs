use crate::time::{now, DateTime};
use serde_json::Value;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Fields is the structured data carried by an entry.
///
/// Keys are kept ordered so the encoded JSON is stable.
pub type Fields = serde_json::Map<String, Value>;

/// Level is the severity of an entry, ordered from the most severe to the
/// least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Logged right before the caller panics.
    Panic,
    /// Logged right before the process exits.
    Fatal,
    /// Errors that should definitely be noted.
    Error,
    /// Non-critical entries that deserve eyes.
    Warn,
    /// General operational entries.
    Info,
    /// Verbose entries, usually only enabled when debugging.
    Debug,
    /// Finer-grained entries than debug.
    Trace,
}

impl Level {
    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

/// Entry is a single structured log entry handed to hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Time the entry was created at.
    pub time: DateTime,
    /// Severity of the entry.
    pub level: Level,
    /// Human readable message.
    pub message: String,
    /// Structured data attached to the entry.
    pub fields: Fields,
}

impl Entry {
    /// Create a new entry at current time without any fields.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: now(),
            level,
            message: message.into(),
            fields: Fields::new(),
        }
    }

    /// Attach a field to the entry, replacing any existing value of the same key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attach all given fields to the entry.
    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Specify the entry time.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = time;
        self
    }
}

/// Merge `overlay` on top of `base` and return the combined fields.
///
/// Values in `overlay` win over values of the same key in `base`. Neither
/// input is modified.
pub fn merge_fields(base: &Fields, overlay: &Fields) -> Fields {
    let mut merged = base.clone();
    for (k, v) in overlay {
        merged.insert(k.clone(), v.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_merge_fields_overlay_wins() {
        let base = json!({"animal": "walrus", "env": "dev"});
        let overlay = json!({"env": "prod", "team": "ops"});

        let merged = merge_fields(
            base.as_object().unwrap(),
            overlay.as_object().unwrap(),
        );

        assert_eq!(
            Value::Object(merged),
            json!({"animal": "walrus", "env": "prod", "team": "ops"})
        );
        // Inputs are left untouched.
        assert_eq!(base["env"], "dev");
    }

    #[test]
    fn test_merge_fields_empty_overlay() {
        let base = json!({"number": 1});
        let merged = merge_fields(base.as_object().unwrap(), &Fields::new());
        assert_eq!(Value::Object(merged), base);
    }

    #[test]
    fn test_entry_builder() {
        let entry = Entry::new(Level::Error, "A walrus appears")
            .with_field("animal", "walrus")
            .with_field("number", 1);

        assert_eq!(entry.level, Level::Error);
        assert_eq!(entry.message, "A walrus appears");
        assert_eq!(
            Value::Object(entry.fields),
            json!({"animal": "walrus", "number": 1})
        );
    }

    #[test]
    fn test_entry_with_time() {
        use chrono::TimeZone;

        let time = chrono::Utc
            .with_ymd_and_hms(2018, 5, 1, 23, 10, 18)
            .unwrap();
        let entry = Entry::new(Level::Warn, "A walrus appears").with_time(time);

        assert_eq!(entry.time, time);
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_level_from_log() {
        let cases = vec![
            (log::Level::Error, Level::Error),
            (log::Level::Warn, Level::Warn),
            (log::Level::Info, Level::Info),
            (log::Level::Debug, Level::Debug),
            (log::Level::Trace, Level::Trace),
        ];

        for (input, expected) in cases {
            assert_eq!(Level::from(input), expected, "Failed on input: {}", input);
        }
        assert!(Level::Panic < Level::Error);
    }
}
