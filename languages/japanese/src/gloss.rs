//! English glosses for constructions.
//!
//! Keys are Title Case construction names. The table keeps the spelling of
//! its source data, including the "Conitional" misspelling and hyphenated
//! "Past-Negative", which the normalized search absorbs.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::features::Person;

pub const DEFAULT_FALLBACK: &str = "I verb";

static GLOSSES: &[(&str, &str)] = &[
    // simple present
    ("", "I verb"),
    ("Past", "I verbed"),
    ("Negative", "I don't verb"),
    ("Past-Negative", "I didn't verb"),
    ("Potential", "\"I can verb\", \"I am able to verb\""),
    ("Past Potential", "I could verb"),
    ("Negative Potential", "I can't verb"),
    ("Past Negative Potential", "I couldn't verb"),
    ("Passive", "I am verbed"),
    ("Past Passive", "I was verbed"),
    ("Negative Passive", "I am not verbed"),
    ("Past Negative Passive", "I was not verbed"),
    ("Causative", "\"I make someone verb\", \"I let someone verb\""),
    ("Past Causative", "I made someone verb"),
    ("Negative Causative", "I don't make someone verb"),
    ("Past Negative Causative", "I didn't make someone verb"),
    ("Causative Passive", "I am made to verb"),
    ("Past Causative Passive", "I was made to verb"),
    ("Negative Causative Passive", "I am not made to verb"),
    ("Past Negative Causative Passive", "I was not made to verb"),
    ("Potential Causative", "I can make someone verb"),
    ("Continuous", "I am verbing"),
    ("Past Continuous", "I was verbing"),
    ("Negative Continuous", "I am not verbing"),
    ("Past Negative Continuous", "I was not verbing"),
    ("Completion", "\"I verb completely\", \"I end up verbing\""),
    ("Past Completion", "I ended up verbing"),
    ("Negative Completion", "I don't end up verbing"),
    ("Past Negative Completion", "I didn't end up verbing"),
    ("Resultant", "It has been verbed"),
    ("Past Resultant", "It had been verbed"),
    ("Negative Resultant", "It has not been verbed"),
    ("Past Negative Resultant", "It had not been verbed"),
    ("Completion Continuous", "I keep on verbing"),
    ("Completion Resultant", "It has been verbed for good"),
    ("Conitional", "If I verb"),
    ("Past Conitional", "If I verbed"),
    ("Negative Conitional", "If I don't verb"),
    ("Past Negative Conditional", "If I didn't verb"),
    ("Desiderative", "\"I want to verb\", \"I would like to verb\""),
    ("Past Desiderative", "I wanted to verb"),
    ("Negative Desiderative", "I don't want to verb"),
    ("Past Negative Desiderative", "I didn't want to verb"),
    ("Deontic", "\"I should verb\", \"I must verb\""),
    ("Past Deontic", "I should have verbed"),
    ("Negative Deontic", "I should not verb"),
    ("Past Negative Deontic", "I should not have verbed"),
    ("Conditional Desiderative", "If I want to verb"),
    ("Conditional Deontic", "If I should verb"),
    ("Potential Conitional", "If I can verb"),
    ("Potential Continuous", "I am able to keep verbing"),
    ("Potential Desiderative", "I want to be able to verb"),
    ("Passive Continuous", "I am being verbed"),
    ("Past Passive Continuous", "I was being verbed"),
    ("Causative Continuous", "I am making someone verb"),
    ("Continuous Desiderative", "I want to keep verbing"),
    ("Continuous Conditional", "If I am verbing"),
    ("Volitional", "\"Let's verb\", \"I shall verb\""),
    ("Negative Volitional", "\"I will not verb\", \"Let's not verb\""),
    ("Imperative", "Verb!"),
    ("T-Form", "\"I verb and...\", \"verb and...\""),
];

static EXACT: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| GLOSSES.iter().copied().collect());

static NORMALIZED: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    GLOSSES
        .iter()
        .map(|(key, gloss)| (normalize_key(key), *gloss))
        .collect()
});

/// Lowercase, '-' as space, collapsed whitespace, "conitional" spelled out
fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("conitional", "conditional")
}

/// Strip surrounding quotes and keep the first of several alternatives
fn clean(raw: &str) -> String {
    let mut text = raw;
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text = &text[1..text.len() - 1];
    }
    match text.split_once("\", \"") {
        Some((first, _)) => first.trim_matches('"').to_string(),
        None => text.to_string(),
    }
}

/// Rewrite a first-person gloss for another person
pub fn personalize(gloss: &str, person: Person) -> String {
    let (subject, lower) = match person {
        Person::First => return gloss.to_string(),
        Person::Second => ("You", "you"),
        Person::Third => ("They", "they"),
    };

    let mut after_subject = false;
    gloss
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            let rewritten = match word {
                "I" if i == 0 => Some(subject),
                "I" => Some(lower),
                "am" if after_subject => Some("are"),
                "was" if after_subject => Some("were"),
                _ => None,
            };
            after_subject = word == "I";
            rewritten.unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outcome of a gloss lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    pub text: String,
    /// The fallback was used because no entry matched
    pub missing: bool,
}

/// Construction name → English gloss, never failing
#[derive(Debug, Clone)]
pub struct GlossResolver {
    fallback: String,
}

impl Default for GlossResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GlossResolver {
    pub fn new() -> Self {
        Self::with_fallback(DEFAULT_FALLBACK)
    }

    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Exact, then trimmed, then normalized match
    pub fn lookup(&self, key: &str) -> Option<String> {
        let raw = EXACT
            .get(key)
            .or_else(|| EXACT.get(key.trim()))
            .or_else(|| NORMALIZED.get(&normalize_key(key)))?;
        Some(clean(raw))
    }

    pub fn gloss(&self, key: &str, person: Person) -> Gloss {
        match self.lookup(key) {
            Some(text) => Gloss {
                text: personalize(&text, person),
                missing: false,
            },
            None => {
                tracing::debug!("No gloss for '{}', using fallback", key);
                Gloss {
                    text: personalize(&self.fallback, person),
                    missing: true,
                }
            }
        }
    }
}
