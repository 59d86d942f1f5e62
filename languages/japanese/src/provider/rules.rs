//! Named forms computed from the conjugation rules.
//!
//! Each named form is rewritten for negative and polite variants according
//! to its own kind, so a past form is never mistaken for a desire form.

use crate::classifier::{classify, InflectionClass};
use crate::irregular::{self, IrregularVerb};
use crate::stem::{derive_base, strip_ending, BaseCategory, Roots};
use crate::validate::validate_verb;

use super::{FormEntry, FormProvider, FormSlot, VerbForms};

/// Base forms of one verb, from its irregular row or by rule
struct Bases<'a> {
    verb: &'a str,
    class: InflectionClass,
    irregular: Option<&'static IrregularVerb>,
}

impl<'a> Bases<'a> {
    fn new(verb: &'a str) -> Self {
        let irregular = irregular::find(verb);
        let class = match irregular {
            // unused for irregular rows
            Some(_) => InflectionClass::RuIchidan,
            None => classify(verb),
        };
        Self {
            verb,
            class,
            irregular,
        }
    }

    fn get(&self, base: BaseCategory, roots: Roots) -> Option<String> {
        match self.irregular {
            Some(entry) => entry.base(base, roots).map(str::to_string),
            None => Some(derive_base(self.verb, self.class, base, roots)),
        }
    }

    fn dictionary(&self) -> Option<String> {
        self.get(BaseCategory::Dictionary, Roots::None)
    }

    fn stem(&self) -> Option<String> {
        self.get(BaseCategory::Stem, Roots::None)
    }

    fn irrealis(&self) -> Option<String> {
        self.get(BaseCategory::NegativeStem, Roots::Negative)
    }

    fn te(&self) -> Option<String> {
        self.get(BaseCategory::TeForm, Roots::Te)
    }

    fn ta(&self) -> Option<String> {
        self.get(BaseCategory::PastForm, Roots::Ta)
    }

    fn hypothetical(&self) -> Option<String> {
        self.get(BaseCategory::Hypothetical, Roots::Conditional)
    }

    fn imperative(&self) -> Option<String> {
        self.get(BaseCategory::Imperative, Roots::Command)
    }

    fn volitional(&self) -> Option<String> {
        self.get(BaseCategory::NegativeStem, Roots::Volitional)
    }
}

fn with(base: Option<String>, suffix: &str) -> Option<String> {
    base.map(|b| b + suffix)
}

/// Japanese form and alternatives of a slot in one variant
fn japanese(bases: &Bases, slot: FormSlot, negative: bool, polite: bool) -> Option<(String, Vec<String>)> {
    let plain = |dict: Option<String>| match (negative, polite) {
        (false, false) => dict,
        (true, false) => with(bases.irrealis(), "ない"),
        (false, true) => with(bases.stem(), "ます"),
        (true, true) => with(bases.stem(), "ません"),
    };

    let form = match slot {
        FormSlot::Present
        | FormSlot::Future
        | FormSlot::Simple
        | FormSlot::Indicative
        | FormSlot::Active => plain(bases.dictionary()),
        FormSlot::Past => match (negative, polite) {
            (false, false) => bases.ta(),
            (true, false) => with(bases.irrealis(), "なかった"),
            (false, true) => with(bases.stem(), "ました"),
            (true, true) => with(bases.stem(), "ませんでした"),
        },
        FormSlot::Progressive | FormSlot::PerfectProgressive => {
            let ending = match (negative, polite) {
                (false, false) => "いる",
                (true, false) => "いない",
                (false, true) => "います",
                (true, true) => "いません",
            };
            with(bases.te(), ending)
        }
        FormSlot::Perfect => match (negative, polite) {
            (false, false) => with(bases.ta(), "ばかり"),
            (true, _) => with(bases.irrealis(), "なかったばかり"),
            (false, true) => with(bases.stem(), "ましたばかり"),
        },
        FormSlot::Subjunctive => match (negative, polite) {
            (false, false) => with(bases.ta(), "らいいのに"),
            (true, false) => with(bases.irrealis(), "なかったらいいのに"),
            (false, true) => with(bases.ta(), "らいいのですが"),
            (true, true) => with(bases.irrealis(), "なかったらいいのですが"),
        },
        FormSlot::Conditional => {
            let (form, alt) = match (negative, polite) {
                (false, false) => (with(bases.hypothetical(), "ば"), with(bases.ta(), "ら")),
                (true, false) => (
                    with(bases.irrealis(), "なければ"),
                    with(bases.irrealis(), "なかったら"),
                ),
                (false, true) => (with(bases.hypothetical(), "ば"), with(bases.stem(), "ましたら")),
                (true, true) => (
                    with(bases.irrealis(), "なければ"),
                    with(bases.stem(), "ませんでしたら"),
                ),
            };
            return form.map(|f| (f, alt.into_iter().collect()));
        }
        FormSlot::Imperative => match (negative, polite) {
            (false, false) => bases.imperative(),
            (true, false) => with(bases.dictionary(), "な"),
            (false, true) => with(bases.stem(), "なさい"),
            (true, true) => with(bases.irrealis(), "ないでください"),
        },
        FormSlot::Volitional => match (negative, polite) {
            (false, false) => bases.volitional(),
            (true, false) => with(bases.irrealis(), "ない"),
            (false, true) => with(bases.stem(), "ましょう"),
            (true, true) => with(bases.stem(), "ません"),
        },
        FormSlot::Potential | FormSlot::Causative | FormSlot::Passive => {
            let (roots, tail) = match slot {
                FormSlot::Potential => (Roots::Potential, "る"),
                FormSlot::Causative => (Roots::Causative, "せる"),
                _ => (Roots::Passive, "れる"),
            };
            // the derived verb is ichidan
            let derived = with(bases.get(BaseCategory::NegativeStem, roots), tail)?;
            let stem = strip_ending(&derived).to_string();
            Some(match (negative, polite) {
                (false, false) => derived,
                (true, false) => format!("{stem}ない"),
                (false, true) => format!("{stem}ます"),
                (true, true) => format!("{stem}ません"),
            })
        }
        FormSlot::Deontic => {
            let ending = match (negative, polite) {
                (false, false) => "なければならない",
                (true, false) => "なくてもいい",
                (false, true) => "なければなりません",
                (true, true) => "なくてもいいです",
            };
            with(bases.irrealis(), ending)
        }
        FormSlot::Desire => {
            let ending = match (negative, polite) {
                (false, false) => "たい",
                (true, false) => "たくない",
                (false, true) => "たいです",
                (true, true) => "たくないです",
            };
            with(bases.stem(), ending)
        }
    };

    form.map(|f| (f, Vec::new()))
}

fn default_english(slot: FormSlot) -> &'static str {
    match slot {
        FormSlot::Present | FormSlot::Simple | FormSlot::Indicative | FormSlot::Active => "I do",
        FormSlot::Past => "I did",
        FormSlot::Future => "I will do",
        FormSlot::Progressive => "I am doing",
        FormSlot::Perfect => "I have done",
        FormSlot::PerfectProgressive => "I have been doing",
        FormSlot::Subjunctive => "I wish I did",
        FormSlot::Conditional => "If I do",
        FormSlot::Imperative => "Do",
        FormSlot::Volitional => "Let's do",
        FormSlot::Potential => "I can do",
        FormSlot::Causative => "I make you do",
        FormSlot::Deontic => "I must do",
        FormSlot::Desire => "I want to do",
        FormSlot::Passive => "It is done by me",
    }
}

const NEGATIONS: [(&str, &str); 7] = [
    ("do", "don't"),
    ("did", "didn't"),
    ("will", "won't"),
    ("am", "am not"),
    ("have", "haven't"),
    ("can", "can't"),
    ("must", "must not"),
];

/// Negate the verb phrase after the last subject "I"
fn negate(english: &str) -> Option<String> {
    let mut words: Vec<&str> = english.split(' ').collect();
    let subject = words.iter().rposition(|w| *w == "I")?;
    let next = *words.get(subject + 1)?;

    match NEGATIONS.iter().find(|(aux, _)| next.eq_ignore_ascii_case(aux)) {
        Some((_, negation)) => words[subject + 1] = *negation,
        None => words.insert(subject + 1, "don't"),
    }
    Some(words.join(" "))
}

/// Mark an English phrase as negative and/or polite
pub fn modify_english(english: &str, negative: bool, polite: bool) -> String {
    if english.is_empty() {
        return String::new();
    }

    let mut markers = Vec::new();
    let mut text = english.to_string();

    if negative {
        match negate(english) {
            Some(negated) => text = negated,
            None => markers.push("[Negative]"),
        }
    }
    if polite {
        markers.push("[Polite]");
    }

    if markers.is_empty() {
        text
    } else {
        format!("{} {}", markers.join(" "), text)
    }
}

/// Computes provider forms from the rules instead of stored data
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleProvider;

impl RuleProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn entry(&self, verb: &str, slot: FormSlot, negative: bool, polite: bool) -> Option<FormEntry> {
        let bases = Bases::new(verb);
        let (japanese, alts) = japanese(&bases, slot, negative, polite)?;
        Some(FormEntry {
            english: modify_english(default_english(slot), negative, polite),
            japanese,
            alts,
        })
    }
}

impl FormProvider for RuleProvider {
    fn forms(&self, verb: &str, negative: bool, polite: bool) -> Option<VerbForms> {
        if let Err(e) = validate_verb(verb) {
            tracing::debug!("Rule provider skipped '{}': {}", verb, e);
            return None;
        }

        let mut forms = VerbForms::default();
        for slot in FormSlot::ALL {
            if let Some(entry) = self.entry(verb, slot, negative, polite) {
                forms.insert(slot, entry);
            }
        }
        Some(forms)
    }
}
