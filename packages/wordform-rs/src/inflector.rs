//! Pluralize / singularize over a [`RuleSet`].

use lazy_static::lazy_static;

use crate::rules::{RuleSet, SuffixRule, PLURAL_RULES, SINGULAR_RULES};

lazy_static! {
    /// Shared immutable default table backing the crate-level functions.
    static ref DEFAULT: Inflector = Inflector::new();
}

/// Pluralize `word` using the standard English table.
pub fn pluralize(word: &str) -> String {
    DEFAULT.pluralize(word)
}

/// Singularize `word` using the standard English table.
pub fn singularize(word: &str) -> String {
    DEFAULT.singularize(word)
}

/// An inflector over an explicit rule table.
///
/// Holds its own [`RuleSet`], so custom exceptions stay scoped to the value
/// that registered them instead of leaking process-wide.
#[derive(Debug, Clone, Default)]
pub struct Inflector {
    rules: RuleSet,
}

impl Inflector {
    /// Build an inflector with the standard English table.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// Build an inflector over a caller-provided table.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Map a singular word to its plural form.
    ///
    /// Total over all inputs: blank strings pass through, unknown words get
    /// the default `+s`, and nothing panics.
    pub fn pluralize(&self, word: &str) -> String {
        self.inflect(word, Direction::Plural)
    }

    /// Map a plural word to its singular form.
    pub fn singularize(&self, word: &str) -> String {
        self.inflect(word, Direction::Singular)
    }

    /// Register a bidirectional irregular pair, e.g. `("cactus", "cacti")`.
    pub fn add_exception(&mut self, singular: &str, plural: &str) {
        self.rules.add_exception(singular, plural);
    }

    /// Register words that are their own plural, e.g. `["sheep"]`.
    pub fn add_uncountable(&mut self, words: &[&str]) {
        self.rules.add_uncountable(words);
    }

    fn inflect(&self, word: &str, direction: Direction) -> String {
        if word.trim().is_empty() {
            return word.to_string();
        }

        if let Some(irregular) = self.rules.irregular(word) {
            let target = match direction {
                Direction::Plural => &irregular.plural,
                Direction::Singular => &irregular.singular,
            };
            return copy_first_char(word, target);
        }

        let suffix_rules: &[SuffixRule] = match direction {
            Direction::Plural => &PLURAL_RULES,
            Direction::Singular => &SINGULAR_RULES,
        };
        for rule in suffix_rules {
            if rule.pattern.is_match(word) {
                return rule
                    .pattern
                    .replace(word, rule.replacement)
                    .into_owned();
            }
        }

        match direction {
            Direction::Plural => format!("{word}s"),
            Direction::Singular => {
                if word.ends_with('s') {
                    word[..word.len() - 1].to_string()
                } else {
                    word.to_string()
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Plural,
    Singular,
}

/// Keep the input's first character exactly as typed and take the rest of
/// the replacement: ("Child", "children") -> "Children".
fn copy_first_char(word: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    match word.chars().next() {
        Some(first) => {
            out.push(first);
            let mut rest = replacement.chars();
            rest.next();
            out.extend(rest);
        }
        None => out.push_str(replacement),
    }
    out
}
