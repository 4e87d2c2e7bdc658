//! Inflection rule tables.
//!
//! The suffix rules are fixed ordered lists shared by every [`RuleSet`];
//! only the irregular/uncountable table is per-instance and mutable.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

/// A bidirectional irregular entry. Uncountable words are stored with both
/// forms equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Irregular {
    pub singular: String,
    pub plural: String,
}

/// One ordered suffix rule: if `pattern` matches, substitute `replacement`
/// (a regex replacement template) and stop.
pub(crate) struct SuffixRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

macro_rules! suffix_rules {
    ($( $pattern:literal => $replacement:literal ),* $(,)?) => {
        vec![
            $( SuffixRule {
                pattern: Regex::new($pattern).unwrap(),
                replacement: $replacement,
            } ),*
        ]
    };
}

lazy_static! {
    /// Pluralization suffix rules, highest priority first.
    pub(crate) static ref PLURAL_RULES: Vec<SuffixRule> = suffix_rules![
        // church -> churches, pass -> passes, bush -> bushes,
        // box -> boxes, buzz -> buzzes
        r"(ch|ss|sh|x|z)$" => "${1}es",
        // fly -> flies, but boy -> boys falls through to the default
        r"([^aeiou])y$" => "${1}ies",
        // knife -> knives, leaf -> leaves
        r"fe?$" => "ves",
        // analysis -> analyses, basis -> bases
        r"sis$" => "ses",
        // bus -> buses, virus -> viruses
        r"(us)$" => "${1}es",
        // hero -> heroes, potato -> potatoes
        r"([^aeiou])o$" => "${1}oes",
        // already plural-looking: cars -> cars
        r"(s)$" => "${1}",
    ];

    /// Singularization suffix rules, highest priority first.
    pub(crate) static ref SINGULAR_RULES: Vec<SuffixRule> = suffix_rules![
        // churches -> church, passes -> pass, boxes -> box
        r"(ch|ss|sh|x|z)es$" => "${1}",
        // flies -> fly
        r"([^aeiou])ies$" => "${1}y",
        // leaves -> leaf, wolves -> wolf
        r"ves$" => "f",
        // heroes -> hero
        r"([^aeiou])oes$" => "${1}o",
        // analyses -> analysis; houses is untouched (vowel before "ses")
        r"([^aeiou])ses$" => "${1}sis",
        // bus -> bus, virus -> virus
        r"(us)$" => "${1}",
    ];
}

/// Default irregular pairs, consulted before any suffix rule.
const DEFAULT_IRREGULARS: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("die", "dice"),
    ("datum", "data"),
    ("medium", "media"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
];

/// Default uncountable words: singular and plural are the same string.
const DEFAULT_UNCOUNTABLES: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "money",
    "information",
    "equipment",
    "news",
    "police",
];

/// The inflection rule table.
///
/// Holds the mutable irregular/uncountable entries; the ordered suffix rule
/// lists are process-wide immutable tables. Lookups are keyed by the
/// downcased form of either side of a pair.
#[derive(Debug, Clone)]
pub struct RuleSet {
    irregulars: HashMap<String, Irregular>,
}

impl RuleSet {
    /// Build the standard English table.
    pub fn new() -> Self {
        let mut rules = Self {
            irregulars: HashMap::new(),
        };
        for (singular, plural) in DEFAULT_IRREGULARS {
            rules.add_exception(singular, plural);
        }
        for word in DEFAULT_UNCOUNTABLES {
            rules.add_exception(word, word);
        }
        rules
    }

    /// Register a bidirectional override consulted before the suffix rules.
    ///
    /// Both forms become lookup keys, so `pluralize("cacti")` and
    /// `singularize("cactus")` resolve the same entry.
    pub fn add_exception(&mut self, singular: &str, plural: &str) {
        let entry = Irregular {
            singular: singular.to_string(),
            plural: plural.to_string(),
        };
        self.irregulars
            .insert(singular.to_lowercase(), entry.clone());
        self.irregulars.insert(plural.to_lowercase(), entry);
    }

    /// Register words whose plural equals their singular.
    pub fn add_uncountable(&mut self, words: &[&str]) {
        for word in words {
            self.add_exception(word, word);
        }
    }

    /// Case-insensitive lookup by either form.
    pub fn irregular(&self, word: &str) -> Option<&Irregular> {
        self.irregulars.get(&word.to_lowercase())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
