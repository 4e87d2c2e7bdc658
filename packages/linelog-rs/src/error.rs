//! Error types for linelog.
//!
//! The pipeline stages (filter, colorizer, formatter) are total functions
//! and never fail; errors only come from parsing configuration values and
//! from the final sink write.

use thiserror::Error;

/// Errors surfaced by [`Logger::log`](crate::Logger::log).
#[derive(Debug, Error)]
pub enum LogError {
    /// The sink rejected the formatted line.
    #[error("failed to write log line to sink")]
    Io(#[from] std::io::Error),
}

/// A severity name that did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity `{input}` (expected debug|info|warn|error|fatal|unknown)")]
pub struct ParseSeverityError {
    pub input: String,
}
