//! Stem transformation: dictionary ending off, class allomorph on.
//!
//! Every table is indexed by [`InflectionClass::index`]:
//! う つ る(godan) く ぐ む ぬ ぶ す る(ichidan).

use serde::Serialize;

use crate::classifier::InflectionClass;
use crate::patterns::Recipe;

type ClassTable = [&'static str; InflectionClass::COUNT];

const NONE: ClassTable = ["", "", "", "", "", "", "", "", "", ""];
const I_ROW: ClassTable = ["い", "ち", "り", "き", "ぎ", "み", "に", "び", "し", ""];
const A_ROW: ClassTable = ["わ", "た", "ら", "か", "が", "ま", "な", "ば", "さ", ""];
const CAUSATIVE: ClassTable = ["わ", "た", "ら", "か", "が", "ま", "な", "ば", "さ", "さ"];
const PASSIVE: ClassTable = ["わ", "た", "ら", "か", "が", "ま", "な", "ば", "さ", "ら"];
const POTENTIAL: ClassTable = ["え", "て", "れ", "け", "げ", "め", "ね", "べ", "せ", "られ"];
const VOLITIONAL: ClassTable = [
    "おう", "とう", "ろう", "こう", "ごう", "もう", "のう", "ぼう", "そう", "よう",
];
const CONDITIONAL: ClassTable = ["え", "て", "れ", "け", "げ", "め", "ね", "べ", "せ", "れ"];
const COMMAND: ClassTable = ["え", "て", "れ", "け", "げ", "め", "ね", "べ", "せ", "ろ"];
// Sound euphony: う/つ/る → っ, く → い, ぐ → い+voicing, む/ぬ/ぶ → ん+voicing, す → し
const TE: ClassTable = [
    "って", "って", "って", "いて", "いで", "んで", "んで", "んで", "して", "て",
];
const TA: ClassTable = [
    "った", "った", "った", "いた", "いだ", "んだ", "んだ", "んだ", "した", "た",
];

/// Which base form a recipe builds on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCategory {
    Dictionary,
    Stem,
    NegativeStem,
    Hypothetical,
    TeForm,
    PastForm,
    Imperative,
}

/// Named per-class root allomorph table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Roots {
    None,
    Negative,
    Causative,
    Passive,
    Potential,
    Volitional,
    Conditional,
    Te,
    Ta,
    Command,
}

impl Roots {
    pub fn by_class(self) -> &'static ClassTable {
        match self {
            Roots::None => &NONE,
            Roots::Negative => &A_ROW,
            Roots::Causative => &CAUSATIVE,
            Roots::Passive => &PASSIVE,
            Roots::Potential => &POTENTIAL,
            Roots::Volitional => &VOLITIONAL,
            Roots::Conditional => &CONDITIONAL,
            Roots::Te => &TE,
            Roots::Ta => &TA,
            Roots::Command => &COMMAND,
        }
    }

    pub fn for_class(self, class: InflectionClass) -> &'static str {
        self.by_class()[class.index()]
    }
}

/// Continuative (i-row) allomorph of a class
pub fn i_row(class: InflectionClass) -> &'static str {
    I_ROW[class.index()]
}

/// Drop the final character
pub fn strip_ending(verb: &str) -> &str {
    match verb.char_indices().next_back() {
        Some((i, _)) => &verb[..i],
        None => "",
    }
}

/// Build the base form a recipe's suffix attaches to
pub fn derive_base(
    verb: &str,
    class: InflectionClass,
    base: BaseCategory,
    roots: Roots,
) -> String {
    let ichidan = class.is_ichidan();
    let stem = strip_ending(verb);

    let root = match base {
        BaseCategory::Dictionary => return verb.to_string(),
        BaseCategory::Stem => i_row(class),
        BaseCategory::NegativeStem => roots.for_class(class),
        BaseCategory::Hypothetical if ichidan => "れ",
        BaseCategory::TeForm if ichidan => "て",
        BaseCategory::PastForm if ichidan => "た",
        BaseCategory::Imperative if ichidan => "ろ",
        BaseCategory::Hypothetical
        | BaseCategory::TeForm
        | BaseCategory::PastForm
        | BaseCategory::Imperative => roots.for_class(class),
    };

    format!("{stem}{root}")
}

/// Apply a recipe to a classified verb.
///
/// Without a recipe the verb comes back unmodified so there is always
/// something to render.
pub fn apply_pattern(verb: &str, class: InflectionClass, recipe: Option<&Recipe>) -> String {
    match recipe {
        Some(recipe) => {
            let mut form = derive_base(verb, class, recipe.base, recipe.roots);
            form.push_str(&recipe.suffix);
            form
        }
        None => verb.to_string(),
    }
}
