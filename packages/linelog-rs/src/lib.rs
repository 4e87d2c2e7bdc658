//! # Linelog
//!
//! A synchronous line logger built from a small composable pipeline:
//!
//! ```text
//! log(severity, payload)
//!     │
//!     ▼ normalize          string            -> {"message": ...}
//!                          error             -> {"message", "backtrace", "error"}
//!                          map               -> itself
//!     ▼ Filter             redact configured key paths to "[FILTERED]"
//!     ▼ Colorizer          wrap header fields in ANSI escapes (TTY only)
//!     ▼ Formatter          render one text or JSON line
//!     ▼ Sink               synchronous write on the calling thread
//! ```
//!
//! ## Key invariants
//!
//! 1. **Pipeline stages are total** — filter, colorizer, and formatter never
//!    fail; every payload shape produces exactly one line.
//! 2. **Redaction never mutates the caller's payload** — it produces a new
//!    structure with unmatched siblings intact.
//! 3. **Colors only on terminals** — the palette colorizer is auto-selected
//!    only when the sink is an interactive stdout/stderr; an explicitly
//!    configured colorizer always wins.
//! 4. **One call, one line** — records below the severity threshold are
//!    dropped before any formatting work.
//!
//! ## Example
//!
//! ```
//! use linelog::{Format, Logger, Severity, Sink};
//! use serde_json::json;
//!
//! let mut logger = Logger::builder("bookshelf")
//!     .level(Severity::Info)
//!     .format(Format::Json)
//!     .filter(["user.password"])
//!     .sink(Sink::Stderr)
//!     .build();
//!
//! logger.info(json!({"verb": "POST", "user": {"password": "hush"}}));
//! ```

pub mod color;
pub mod error;
pub mod filter;
pub mod format;
pub mod logger;
pub mod payload;
pub mod severity;

pub use color::{Color, ColorMap, Colorizer, Header};
pub use error::{LogError, ParseSeverityError};
pub use filter::{Filter, FILTERED};
pub use format::{Format, Formatter};
pub use logger::{Logger, LoggerBuilder, Sink};
pub use payload::Payload;
pub use severity::Severity;
