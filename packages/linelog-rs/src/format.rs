//! Line rendering.
//!
//! Both variants share the same preprocessing: normalize the payload to a
//! message map, run it through the [`Filter`], then merge with the header.
//! Rendering is total; any payload shape produces exactly one line.

use chrono::{DateTime, FixedOffset, Utc};
use serde_json::{Map, Value};

use crate::color::Colorizer;
use crate::filter::Filter;
use crate::payload::{Payload, BACKTRACE_KEY, ERROR_KEY, MESSAGE_KEY};
use crate::severity::Severity;

/// Header keys that never appear among rendered message values.
const RESERVED_KEYS: [&str; 3] = ["app", "severity", "time"];

/// Timestamp layout for text lines: local time with offset.
const TEXT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";
/// Timestamp layout for JSON lines: ISO-8601 UTC.
const JSON_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Output variant, fixed at logger construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `[app] [SEVERITY] [time] message`
    #[default]
    Text,
    /// One JSON object per line, header keys first.
    Json,
}

/// Renders one header + message combination as a single output line.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    format: Format,
    filter: Filter,
}

impl Formatter {
    pub fn new(format: Format, filter: Filter) -> Self {
        Self { format, filter }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Render one record. The colorizer only touches text output; JSON is
    /// meant for non-interactive consumption and stays escape-free.
    pub fn render(
        &self,
        app: &str,
        severity: Severity,
        time: DateTime<FixedOffset>,
        payload: Payload,
        colorizer: &Colorizer,
    ) -> String {
        let message = self.filter.apply(&payload.into_map());
        match self.format {
            Format::Text => self.render_text(app, severity, time, &message, colorizer),
            Format::Json => self.render_json(app, severity, time, &message),
        }
    }

    fn render_text(
        &self,
        app: &str,
        severity: Severity,
        time: DateTime<FixedOffset>,
        message: &Map<String, Value>,
        colorizer: &Colorizer,
    ) -> String {
        let time = time.format(TEXT_TIME_FORMAT).to_string();
        let header = colorizer.colorize(app, severity.label(), &time);
        let mut line = format!("[{}] [{}] [{}] ", header.app, header.severity, header.time);

        if let Some(Value::String(kind)) = message.get(ERROR_KEY) {
            let text = message
                .get(MESSAGE_KEY)
                .map(render_value)
                .unwrap_or_default();
            line.push_str(&format!("{kind}: {text}\n"));
            if let Some(Value::Array(backtrace)) = message.get(BACKTRACE_KEY) {
                for entry in backtrace {
                    line.push_str(&format!("from {}\n", render_value(entry)));
                }
            }
        } else {
            let body = message
                .iter()
                .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
                .map(|(_, value)| render_value(value))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&body);
            line.push('\n');
        }
        line
    }

    fn render_json(
        &self,
        app: &str,
        severity: Severity,
        time: DateTime<FixedOffset>,
        message: &Map<String, Value>,
    ) -> String {
        let mut record = Map::new();
        record.insert("app".to_string(), Value::String(app.to_string()));
        record.insert(
            "severity".to_string(),
            Value::String(severity.label().to_string()),
        );
        record.insert(
            "time".to_string(),
            Value::String(
                time.with_timezone(&Utc)
                    .format(JSON_TIME_FORMAT)
                    .to_string(),
            ),
        );
        for (key, value) in message {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                record.insert(key.clone(), value.clone());
            }
        }
        let mut line =
            serde_json::to_string(&record).unwrap_or_else(|_| String::from("{}"));
        line.push('\n');
        line
    }
}

/// Strings render bare; everything else renders as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_time() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2017, 1, 15, 16, 0, 23)
            .unwrap()
    }

    fn text_formatter() -> Formatter {
        Formatter::new(Format::Text, Filter::default())
    }

    #[test]
    fn test_text_line_for_a_plain_message() {
        let line = text_formatter().render(
            "app",
            Severity::Info,
            sample_time(),
            Payload::from("foo"),
            &Colorizer::NoOp,
        );
        assert_eq!(line, "[app] [INFO] [2017-01-15 16:00:23 +0100] foo\n");
    }

    #[test]
    fn test_text_line_for_a_structured_payload() {
        let payload = Payload::from(
            json!({"verb": "GET", "status": 200})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let line = text_formatter().render(
            "app",
            Severity::Info,
            sample_time(),
            payload,
            &Colorizer::NoOp,
        );
        assert_eq!(line, "[app] [INFO] [2017-01-15 16:00:23 +0100] GET 200\n");
    }

    #[test]
    fn test_text_line_for_a_failure() {
        let payload = Payload::Failure {
            kind: "ReadError".to_string(),
            message: "file missing".to_string(),
            backtrace: vec!["loader".to_string(), "main".to_string()],
        };
        let line = text_formatter().render(
            "app",
            Severity::Error,
            sample_time(),
            payload,
            &Colorizer::NoOp,
        );
        assert_eq!(
            line,
            "[app] [ERROR] [2017-01-15 16:00:23 +0100] ReadError: file missing\n\
             from loader\nfrom main\n"
        );
    }

    #[test]
    fn test_text_line_applies_the_filter() {
        let formatter = Formatter::new(Format::Text, Filter::new(["password"]));
        let payload = Payload::from(
            json!({"password": "secret"}).as_object().cloned().unwrap(),
        );
        let line = formatter.render(
            "app",
            Severity::Info,
            sample_time(),
            payload,
            &Colorizer::NoOp,
        );
        assert_eq!(
            line,
            "[app] [INFO] [2017-01-15 16:00:23 +0100] [FILTERED]\n"
        );
    }

    #[test]
    fn test_text_line_wraps_colorized_header_fields() {
        let line = text_formatter().render(
            "app",
            Severity::Info,
            sample_time(),
            Payload::from("foo"),
            &Colorizer::default_palette(),
        );
        assert!(line.starts_with("[\x1b[33mapp\x1b[0m] [\x1b[35mINFO\x1b[0m] "));
        assert!(line.contains("[\x1b[36m2017-01-15 16:00:23 +0100\x1b[0m] foo\n"));
    }

    #[test]
    fn test_json_line_normalizes_time_to_utc() {
        let formatter = Formatter::new(Format::Json, Filter::default());
        let line = formatter.render(
            "app",
            Severity::Info,
            sample_time(),
            Payload::from("foo"),
            &Colorizer::NoOp,
        );
        assert_eq!(
            line,
            "{\"app\":\"app\",\"severity\":\"INFO\",\"time\":\"2017-01-15T15:00:23Z\",\"message\":\"foo\"}\n"
        );
    }

    #[test]
    fn test_json_line_carries_structured_fields() {
        let formatter = Formatter::new(Format::Json, Filter::new(["token"]));
        let payload = Payload::from(
            json!({"verb": "GET", "token": "secret"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let line = formatter.render(
            "app",
            Severity::Warn,
            sample_time(),
            payload,
            &Colorizer::NoOp,
        );
        assert_eq!(
            line,
            "{\"app\":\"app\",\"severity\":\"WARN\",\"time\":\"2017-01-15T15:00:23Z\",\"verb\":\"GET\",\"token\":\"[FILTERED]\"}\n"
        );
    }

    #[test]
    fn test_message_cannot_shadow_header_keys() {
        let formatter = Formatter::new(Format::Json, Filter::default());
        let payload = Payload::from(
            json!({"severity": "TRACE", "message": "foo"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let line = formatter.render(
            "app",
            Severity::Info,
            sample_time(),
            payload,
            &Colorizer::NoOp,
        );
        assert!(line.contains("\"severity\":\"INFO\""));
        assert!(!line.contains("TRACE"));
    }
}
