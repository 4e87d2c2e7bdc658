//! # Wordform
//!
//! English word inflection: pluralize and singularize words through an
//! ordered rule table with irregular and uncountable overrides.
//!
//! ## How a word is inflected
//!
//! Rule evaluation order is fixed and significant:
//!
//! 1. **Blank guard** — empty or all-whitespace input is returned unchanged.
//! 2. **Irregular table** — case-insensitive lookup by either form
//!    ("child" and "children" both resolve the same entry). The result keeps
//!    the input's first character exactly as typed.
//! 3. **Suffix rules** — an ordered list of `(pattern, replacement)` pairs;
//!    the first matching rule wins and no further rules are tried.
//! 4. **Default** — append or drop a trailing `s`.
//!
//! Every input has a defined output; nothing here panics or errors.
//!
//! ## Custom rules
//!
//! The default table lives in a [`RuleSet`] value, not a process-wide
//! global. To add overrides, build an explicit [`Inflector`] and register
//! them before handing it out:
//!
//! ```
//! use wordform::Inflector;
//!
//! let mut inflector = Inflector::new();
//! inflector.add_exception("cactus", "cacti");
//! inflector.add_uncountable(&["deploy_metadata"]);
//!
//! assert_eq!(inflector.pluralize("cactus"), "cacti");
//! assert_eq!(inflector.singularize("cacti"), "cactus");
//! ```
//!
//! Registration mutates the irregular table; do it during single-threaded
//! setup, before sharing the inflector across threads. Lookups after that
//! point are read-only and safe to run concurrently.
//!
//! For one-off calls with the stock English table, the crate-level
//! [`pluralize`] and [`singularize`] functions delegate to a shared
//! immutable default:
//!
//! ```
//! assert_eq!(wordform::pluralize("church"), "churches");
//! assert_eq!(wordform::singularize("flies"), "fly");
//! ```

pub mod inflector;
pub mod rules;

pub use inflector::{pluralize, singularize, Inflector};
pub use rules::RuleSet;
