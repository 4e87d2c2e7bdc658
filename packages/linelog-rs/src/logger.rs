//! The logger: severity gate, pipeline, and sink.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, FixedOffset, Local};

use crate::color::Colorizer;
use crate::error::LogError;
use crate::filter::Filter;
use crate::format::{Format, Formatter};
use crate::payload::Payload;
use crate::severity::Severity;

/// Where formatted lines go.
///
/// TTY auto-detection only applies to [`Sink::Stdout`] and [`Sink::Stderr`];
/// a caller-supplied writer is never treated as interactive.
pub enum Sink {
    Stdout,
    Stderr,
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    fn is_terminal(&self) -> bool {
        match self {
            Sink::Stdout => io::stdout().is_terminal(),
            Sink::Stderr => io::stderr().is_terminal(),
            Sink::Writer(_) => false,
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            Sink::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            Sink::Writer(writer) => {
                writer.write_all(line.as_bytes())?;
                writer.flush()
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("Sink::Stdout"),
            Sink::Stderr => f.write_str("Sink::Stderr"),
            Sink::Writer(_) => f.write_str("Sink::Writer(..)"),
        }
    }
}

/// A synchronous line logger.
///
/// Each call stamps the current time, runs the record through the
/// filter/colorizer/formatter pipeline, and writes exactly one line to the
/// sink on the calling thread.
///
/// # Example
///
/// ```
/// use linelog::{Logger, Severity, Sink};
///
/// let mut logger = Logger::builder("bookshelf")
///     .level(Severity::Info)
///     .filter(["password"])
///     .sink(Sink::Stderr)
///     .build();
///
/// logger.info("application started");
/// ```
#[derive(Debug)]
pub struct Logger {
    app_name: String,
    level: Severity,
    formatter: Formatter,
    colorizer: Colorizer,
    sink: Sink,
}

impl Logger {
    /// A text logger writing to stdout with no filtering.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self::builder(app_name).build()
    }

    pub fn builder(app_name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(app_name)
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// Log one record. Records below the threshold are dropped before any
    /// formatting work. The only failure mode is the sink write.
    pub fn log(
        &mut self,
        severity: Severity,
        payload: impl Into<Payload>,
    ) -> Result<(), LogError> {
        if severity < self.level {
            return Ok(());
        }
        let now: DateTime<FixedOffset> = Local::now().fixed_offset();
        let line = self
            .formatter
            .render(&self.app_name, severity, now, payload.into(), &self.colorizer);
        self.sink.write_line(&line)?;
        Ok(())
    }

    pub fn debug(&mut self, payload: impl Into<Payload>) {
        let _ = self.log(Severity::Debug, payload);
    }

    pub fn info(&mut self, payload: impl Into<Payload>) {
        let _ = self.log(Severity::Info, payload);
    }

    pub fn warn(&mut self, payload: impl Into<Payload>) {
        let _ = self.log(Severity::Warn, payload);
    }

    pub fn error(&mut self, payload: impl Into<Payload>) {
        let _ = self.log(Severity::Error, payload);
    }

    pub fn fatal(&mut self, payload: impl Into<Payload>) {
        let _ = self.log(Severity::Fatal, payload);
    }

    pub fn unknown(&mut self, payload: impl Into<Payload>) {
        let _ = self.log(Severity::Unknown, payload);
    }
}

/// Builder for [`Logger`].
pub struct LoggerBuilder {
    app_name: String,
    level: Severity,
    format: Format,
    filter_paths: Vec<String>,
    colorizer: Option<Colorizer>,
    sink: Sink,
}

impl LoggerBuilder {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            level: Severity::Debug,
            format: Format::Text,
            filter_paths: Vec::new(),
            colorizer: None,
            sink: Sink::Stdout,
        }
    }

    /// Minimum severity that gets written.
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Shorthand for `format(Format::Json)`.
    pub fn json(self) -> Self {
        self.format(Format::Json)
    }

    /// Dot-delimited key paths to redact, e.g. `["user.password"]`.
    pub fn filter<I, S>(mut self, key_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_paths = key_paths.into_iter().map(Into::into).collect();
        self
    }

    /// Force a colorizer, overriding TTY auto-detection.
    pub fn colorizer(mut self, colorizer: Colorizer) -> Self {
        self.colorizer = Some(colorizer);
        self
    }

    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Shorthand for `sink(Sink::Writer(..))`.
    pub fn writer(self, writer: Box<dyn Write + Send>) -> Self {
        self.sink(Sink::Writer(writer))
    }

    pub fn build(self) -> Logger {
        let colorizer = match self.colorizer {
            Some(colorizer) => colorizer,
            None => {
                if self.format == Format::Text && self.sink.is_terminal() {
                    Colorizer::default_palette()
                } else {
                    Colorizer::NoOp
                }
            }
        };
        Logger {
            app_name: self.app_name,
            level: self.level,
            formatter: Formatter::new(self.format, Filter::new(self.filter_paths)),
            colorizer,
            sink: self.sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test sink capturing written bytes.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logger(level: Severity) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder("test")
            .level(level)
            .writer(Box::new(buffer.clone()))
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_writes_one_line_per_call() {
        let (mut logger, buffer) = capture_logger(Severity::Debug);
        logger.info("hello");
        logger.warn("careful");
        let output = buffer.contents();
        assert_eq!(output.lines().count(), 2);
        assert!(output.starts_with("[test] [INFO] ["));
        assert!(output.contains("] hello\n[test] [WARN] ["));
        assert!(output.ends_with("] careful\n"));
    }

    #[test]
    fn test_records_below_threshold_are_dropped() {
        let (mut logger, buffer) = capture_logger(Severity::Warn);
        logger.debug("noise");
        logger.info("noise");
        logger.error("signal");
        let output = buffer.contents();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("[ERROR]"));
    }

    #[test]
    fn test_unknown_is_never_dropped() {
        let (mut logger, buffer) = capture_logger(Severity::Fatal);
        logger.unknown("odd");
        assert!(buffer.contents().contains("[UNKNOWN]"));
    }

    #[test]
    fn test_supplied_writer_disables_colors() {
        let (mut logger, buffer) = capture_logger(Severity::Debug);
        logger.info("plain");
        assert!(!buffer.contents().contains('\x1b'));
    }

    #[test]
    fn test_explicit_colorizer_overrides_tty_detection() {
        let buffer = SharedBuffer::default();
        let mut logger = Logger::builder("test")
            .colorizer(Colorizer::default_palette())
            .writer(Box::new(buffer.clone()))
            .build();
        logger.info("painted");
        assert!(buffer.contents().contains("\x1b[33mtest\x1b[0m"));
    }

    #[test]
    fn test_json_logger_emits_json_objects() {
        let buffer = SharedBuffer::default();
        let mut logger = Logger::builder("test")
            .json()
            .writer(Box::new(buffer.clone()))
            .build();
        logger.info("hello");
        let output = buffer.contents();
        assert!(output.starts_with("{\"app\":\"test\",\"severity\":\"INFO\",\"time\":\""));
        assert!(output.ends_with("\",\"message\":\"hello\"}\n"));
    }

    #[test]
    fn test_filter_paths_reach_the_pipeline() {
        let buffer = SharedBuffer::default();
        let mut logger = Logger::builder("test")
            .filter(["password"])
            .writer(Box::new(buffer.clone()))
            .build();
        logger.info(serde_json::json!({"password": "secret", "user": "kit"}));
        let output = buffer.contents();
        assert!(output.contains("[FILTERED]"));
        assert!(!output.contains("secret"));
        assert!(output.contains("kit"));
    }

    #[test]
    fn test_caught_errors_render_with_origin_lines() {
        let buffer = SharedBuffer::default();
        let mut logger = Logger::builder("test")
            .writer(Box::new(buffer.clone()))
            .build();
        let err = io::Error::new(io::ErrorKind::NotFound, "config missing");
        logger.error(Payload::from_error(&err));
        let output = buffer.contents();
        assert!(output.contains("Error: config missing\n"));
    }

    #[test]
    fn test_log_surfaces_sink_failures() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut logger = Logger::builder("test")
            .writer(Box::new(FailingSink))
            .build();
        let result = logger.log(Severity::Info, "hello");
        assert!(matches!(result, Err(LogError::Io(_))));
    }
}
