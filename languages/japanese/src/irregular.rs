//! Lexical exceptions looked up instead of derived.
//!
//! Each verb lists the base form it takes for every base derivation a
//! recipe can ask for; the recipe's suffix is then appended unchanged, so
//! an irregular verb covers every construction the pattern tables cover.

use katsuyo_core::types::Formality;

use crate::construction::Construction;
use crate::patterns::PatternTable;
use crate::stem::{BaseCategory, Roots};

const SLOTS: usize = 11;

/// One irregular verb's base forms.
///
/// Slot order: dictionary, stem, negative, causative, passive, potential,
/// volitional, te, ta, hypothetical, imperative. `None` marks a form the
/// verb does not have.
#[derive(Debug)]
pub struct IrregularVerb {
    pub dictionary: &'static str,
    slots: [Option<&'static str>; SLOTS],
}

static IRREGULAR_VERBS: [IrregularVerb; 6] = [
    IrregularVerb {
        dictionary: "する",
        slots: [
            Some("する"),
            Some("し"),
            Some("し"),
            Some("さ"),
            Some("さ"),
            Some("でき"),
            Some("しよう"),
            Some("して"),
            Some("した"),
            Some("すれ"),
            Some("しろ"),
        ],
    },
    IrregularVerb {
        dictionary: "くる",
        slots: [
            Some("くる"),
            Some("き"),
            Some("こ"),
            Some("こさ"),
            Some("こら"),
            Some("こられ"),
            Some("こよう"),
            Some("きて"),
            Some("きた"),
            Some("くれ"),
            Some("こい"),
        ],
    },
    // Kanji spelling of くる
    IrregularVerb {
        dictionary: "来る",
        slots: [
            Some("来る"),
            Some("来"),
            Some("来"),
            Some("来さ"),
            Some("来ら"),
            Some("来られ"),
            Some("来よう"),
            Some("来て"),
            Some("来た"),
            Some("来れ"),
            Some("来い"),
        ],
    },
    IrregularVerb {
        dictionary: "ある",
        slots: [
            Some("ある"),
            Some("あり"),
            Some(""),
            None,
            None,
            None,
            Some("あろう"),
            Some("あって"),
            Some("あった"),
            Some("あれ"),
            Some("あれ"),
        ],
    },
    IrregularVerb {
        dictionary: "いる",
        slots: [
            Some("いる"),
            Some("い"),
            Some("い"),
            Some("いさ"),
            Some("いら"),
            Some("いられ"),
            Some("いよう"),
            Some("いて"),
            Some("いた"),
            Some("いれ"),
            Some("いろ"),
        ],
    },
    IrregularVerb {
        dictionary: "行く",
        slots: [
            Some("行く"),
            Some("行き"),
            Some("行か"),
            Some("行か"),
            Some("行か"),
            Some("行け"),
            Some("行こう"),
            Some("行って"),
            Some("行った"),
            Some("行け"),
            Some("行け"),
        ],
    },
];

fn slot(base: BaseCategory, roots: Roots) -> Option<usize> {
    let index = match (base, roots) {
        (BaseCategory::Dictionary, _) => 0,
        (BaseCategory::Stem, _) => 1,
        (BaseCategory::NegativeStem, Roots::Negative) => 2,
        (BaseCategory::NegativeStem, Roots::Causative) => 3,
        (BaseCategory::NegativeStem, Roots::Passive) => 4,
        (BaseCategory::NegativeStem, Roots::Potential) => 5,
        (BaseCategory::NegativeStem, Roots::Volitional) => 6,
        (BaseCategory::TeForm, _) => 7,
        (BaseCategory::PastForm, _) => 8,
        (BaseCategory::Hypothetical, _) => 9,
        (BaseCategory::Imperative, _) => 10,
        (BaseCategory::NegativeStem, _) => return None,
    };
    Some(index)
}

impl IrregularVerb {
    /// Base form for a derivation, `None` when the verb lacks it
    pub fn base(&self, base: BaseCategory, roots: Roots) -> Option<&'static str> {
        slot(base, roots).and_then(|i| self.slots[i])
    }
}

/// Result of an irregular lookup for a verb known to be irregular
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrregularForm {
    Found(String),
    /// The verb has no form for this cell; rendered as an empty string
    NotFound,
}

pub fn find(verb: &str) -> Option<&'static IrregularVerb> {
    IRREGULAR_VERBS.iter().find(|v| v.dictionary == verb)
}

pub fn is_irregular(verb: &str) -> bool {
    find(verb).is_some()
}

/// Look up an irregular verb's form, `None` for regular verbs
pub fn lookup_irregular(
    verb: &str,
    construction: &Construction,
    formality: Formality,
) -> Option<IrregularForm> {
    let entry = find(verb)?;

    let form = PatternTable::for_tier(formality.tier())
        .recipe(construction)
        .and_then(|recipe| {
            entry
                .base(recipe.base, recipe.roots)
                .map(|base| format!("{base}{}", recipe.suffix))
        });

    Some(match form {
        Some(form) => IrregularForm::Found(form),
        None => IrregularForm::NotFound,
    })
}
