//! Structured JSON logger
//!
//! One log line = one event: a single JSON object with an `event` name, a
//! `severity`, and string-valued fields. Keys are emitted in deterministic
//! (alphabetical) order. Logging is synchronous and unbuffered; info and
//! warn lines go to stdout, errors to stderr.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger emitting one JSON line per event
pub struct Logger;

impl Logger {
    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        // serde_json's Map is key-ordered, which gives deterministic output
        // without sorting by hand.
        let mut line = Map::new();
        line.insert("event".to_string(), Value::String(event.to_string()));
        line.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            line.insert((*key).to_string(), Value::String((*value).to_string()));
        }

        if let Ok(mut rendered) = serde_json::to_string(&Value::Object(line)) {
            rendered.push('\n');
            let _ = writer.write_all(rendered.as_bytes());
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
