//! Key-path redaction for structured payloads.
//!
//! A filter holds dot-delimited key paths (`"user.password"`). Applying it
//! replaces every value whose path matches a rule with the literal
//! [`FILTERED`] marker, leaving unmatched siblings untouched. Matching an
//! interior segment redacts the whole subtree under it.
//!
//! Matching is segment-bounded: the rule `"user.password"` matches the path
//! `user.password` but not `user.password_confirmation`.

use regex::Regex;
use serde_json::{Map, Value};

/// Replacement value written in place of a redacted field.
pub const FILTERED: &str = "[FILTERED]";

/// A compiled set of redaction rules.
///
/// Applying a filter never fails and never mutates its input; an empty rule
/// set returns an equal copy.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    patterns: Vec<Regex>,
}

impl Filter {
    /// Compile dot-delimited key paths into boundary-anchored patterns.
    pub fn new<I, S>(key_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = key_paths
            .into_iter()
            .map(|path| {
                // the rule must sit on segment boundaries within the path
                let pattern = format!(r"(\.|^){}(\.|$)", regex::escape(path.as_ref()));
                Regex::new(&pattern).expect("escaped key path is a valid pattern")
            })
            .collect();
        Self { patterns }
    }

    /// True when no key paths are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Produce a redacted copy of `payload`.
    pub fn apply(&self, payload: &Map<String, Value>) -> Map<String, Value> {
        if self.is_empty() {
            return payload.clone();
        }
        payload
            .iter()
            .map(|(key, value)| (key.clone(), self.redact(value, key)))
            .collect()
    }

    fn redact(&self, value: &Value, path: &str) -> Value {
        if self.matches(path) {
            return Value::String(FILTERED.to_string());
        }
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, child)| {
                        let child_path = format!("{path}.{key}");
                        (key.clone(), self.redact(child, &child_path))
                    })
                    .collect(),
            ),
            // arrays of maps are traversed by ordinal position
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, child)| {
                        let child_path = format!("{path}.{index}");
                        self.redact(child, &child_path)
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }
}
