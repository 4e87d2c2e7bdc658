//! Log payload normalization.
//!
//! A log call accepts a plain string, a structured map, or a caught error.
//! Before formatting, every shape is normalized to a flat message map:
//!
//! - `"boom"` -> `{"message": "boom"}`
//! - `{"user_id": 7}` -> itself
//! - an error -> `{"message", "backtrace", "error"}`
//! - any other JSON value -> `{"message": <value>}`
//!
//! Normalization is total; no payload shape is rejected.

use serde_json::{Map, Value};

/// Message-map key holding the human-readable text.
pub const MESSAGE_KEY: &str = "message";
/// Message-map key holding the error kind, present only for failures.
pub const ERROR_KEY: &str = "error";
/// Message-map key holding failure origin lines.
pub const BACKTRACE_KEY: &str = "backtrace";

/// One log payload, exactly one of three shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A plain text message.
    Text(String),
    /// A structured key/value payload.
    Structured(Map<String, Value>),
    /// A caught failure: kind, message, and origin lines.
    Failure {
        kind: String,
        message: String,
        backtrace: Vec<String>,
    },
}

impl Payload {
    /// Capture a caught error: the kind is the error's type name, the
    /// backtrace is its source chain, outermost cause first.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let mut backtrace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            backtrace.push(cause.to_string());
            source = cause.source();
        }
        Payload::Failure {
            kind: short_type_name::<E>().to_string(),
            message: err.to_string(),
            backtrace,
        }
    }

    /// Normalize to the flat message map consumed by the formatter.
    pub fn into_map(self) -> Map<String, Value> {
        match self {
            Payload::Text(text) => {
                let mut map = Map::new();
                map.insert(MESSAGE_KEY.to_string(), Value::String(text));
                map
            }
            Payload::Structured(map) => map,
            Payload::Failure {
                kind,
                message,
                backtrace,
            } => {
                let mut map = Map::new();
                map.insert(MESSAGE_KEY.to_string(), Value::String(message));
                map.insert(
                    BACKTRACE_KEY.to_string(),
                    Value::Array(backtrace.into_iter().map(Value::String).collect()),
                );
                map.insert(ERROR_KEY.to_string(), Value::String(kind));
                map
            }
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload::Structured(map)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Payload::Text(text),
            Value::Object(map) => Payload::Structured(map),
            // any other JSON value is coerced to {"message": <value>}
            other => {
                let mut map = Map::new();
                map.insert(MESSAGE_KEY.to_string(), other);
                Payload::Structured(map)
            }
        }
    }
}

/// Last path segment of a type name: `app::io::ReadError` -> `ReadError`.
fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
