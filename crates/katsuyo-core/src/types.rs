use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Register in which a form is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    #[default]
    Casual,
    Standard,
    Polite,
    Formal,
}

impl Formality {
    pub const ALL: [Formality; 4] = [
        Formality::Casual,
        Formality::Standard,
        Formality::Polite,
        Formality::Formal,
    ];

    /// Pattern tier this formality is rendered from
    pub fn tier(self) -> Tier {
        match self {
            Formality::Casual | Formality::Standard => Tier::Casual,
            Formality::Polite | Formality::Formal => Tier::Polite,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::Standard => "standard",
            Formality::Polite => "polite",
            Formality::Formal => "formal",
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Formality::Casual),
            "standard" => Ok(Formality::Standard),
            "polite" => Ok(Formality::Polite),
            "formal" => Ok(Formality::Formal),
            other => Err(format!("unknown formality: {other}")),
        }
    }
}

/// Casual/standard share one suffix system, polite/formal the other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Casual,
    Polite,
}

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Casual, Tier::Polite];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Casual => "casual",
            Tier::Polite => "polite",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A soft failure that was absorbed by a documented fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    /// Final character matched no known ending, classified as godan-ru
    UnclassifiableVerb { verb: String },
    /// No recipe for this construction in this tier, verb returned unmodified
    MissingPattern { construction: String, tier: Tier },
    /// No gloss entry, generic gloss used
    MissingGloss { construction: String },
    /// Irregular verb has no cell for this construction, rendered empty
    MissingIrregularCell {
        verb: String,
        construction: String,
        tier: Tier,
    },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::UnclassifiableVerb { verb } => {
                write!(f, "unclassifiable verb {verb}, treated as godan-ru")
            }
            Fallback::MissingPattern { construction, tier } => {
                write!(f, "no {tier} pattern for '{construction}'")
            }
            Fallback::MissingGloss { construction } => {
                write!(f, "no gloss for '{construction}'")
            }
            Fallback::MissingIrregularCell {
                verb,
                construction,
                tier,
            } => write!(f, "irregular {verb} has no {tier} form for '{construction}'"),
        }
    }
}

/// Where a surface form came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSource {
    Derived,
    Irregular,
    Provider,
    Unmodified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationResult {
    pub construction: String,
    pub surface_form: String,
    pub gloss: String,
    pub source: FormSource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<Fallback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub formality: Formality,
    pub surface_form: String,
    pub source: FormSource,
}

/// One construction rendered in all four formalities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub verb: String,
    pub construction: String,
    pub gloss: String,
    pub cells: Vec<GridCell>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<Fallback>,
}

impl Grid {
    pub fn cell(&self, formality: Formality) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.formality == formality)
    }
}
