//! Pre-computed named forms from a verb-data provider.
//!
//! The engine consults a provider for the handful of constructions it
//! pre-computes and derives everything else locally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::construction::{AspectChain, Construction, MoodChain};

pub mod json;
pub mod rules;

pub use json::JsonProvider;
pub use rules::RuleProvider;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Failed to read provider data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid provider data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub english: String,
    pub japanese: String,
    #[serde(default)]
    pub alts: Vec<String>,
}

pub type FormGroup = BTreeMap<String, FormEntry>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tenses {
    pub time: FormGroup,
    pub aspect: FormGroup,
    pub mood: FormGroup,
    pub modals: FormGroup,
    pub desire: FormGroup,
}

/// Named forms of one verb in one negative/polite variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbForms {
    pub tenses: Tenses,
    pub voice: FormGroup,
}

/// A named form, addressed by group and key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSlot {
    Present,
    Past,
    Future,
    Simple,
    Progressive,
    Perfect,
    PerfectProgressive,
    Indicative,
    Subjunctive,
    Conditional,
    Imperative,
    Volitional,
    Potential,
    Causative,
    Deontic,
    Desire,
    Active,
    Passive,
}

impl FormSlot {
    pub const ALL: [FormSlot; 18] = [
        FormSlot::Present,
        FormSlot::Past,
        FormSlot::Future,
        FormSlot::Simple,
        FormSlot::Progressive,
        FormSlot::Perfect,
        FormSlot::PerfectProgressive,
        FormSlot::Indicative,
        FormSlot::Subjunctive,
        FormSlot::Conditional,
        FormSlot::Imperative,
        FormSlot::Volitional,
        FormSlot::Potential,
        FormSlot::Causative,
        FormSlot::Deontic,
        FormSlot::Desire,
        FormSlot::Active,
        FormSlot::Passive,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormSlot::Present => "present",
            FormSlot::Past => "past",
            FormSlot::Future => "future",
            FormSlot::Simple => "simple",
            FormSlot::Progressive => "progressive",
            FormSlot::Perfect => "perfect",
            FormSlot::PerfectProgressive => "perfect_progressive",
            FormSlot::Indicative => "indicative",
            FormSlot::Subjunctive => "subjunctive",
            FormSlot::Conditional => "conditional",
            FormSlot::Imperative => "imperative",
            FormSlot::Volitional => "volitional",
            FormSlot::Potential => "potential",
            FormSlot::Causative => "causative",
            FormSlot::Deontic => "deontic",
            FormSlot::Desire => "subject",
            FormSlot::Active => "active",
            FormSlot::Passive => "passive",
        }
    }
}

impl VerbForms {
    fn group(&self, slot: FormSlot) -> &FormGroup {
        match slot {
            FormSlot::Present | FormSlot::Past | FormSlot::Future => &self.tenses.time,
            FormSlot::Simple
            | FormSlot::Progressive
            | FormSlot::Perfect
            | FormSlot::PerfectProgressive => &self.tenses.aspect,
            FormSlot::Indicative
            | FormSlot::Subjunctive
            | FormSlot::Conditional
            | FormSlot::Imperative
            | FormSlot::Volitional => &self.tenses.mood,
            FormSlot::Potential | FormSlot::Causative | FormSlot::Deontic => &self.tenses.modals,
            FormSlot::Desire => &self.tenses.desire,
            FormSlot::Active | FormSlot::Passive => &self.voice,
        }
    }

    fn group_mut(&mut self, slot: FormSlot) -> &mut FormGroup {
        match slot {
            FormSlot::Present | FormSlot::Past | FormSlot::Future => &mut self.tenses.time,
            FormSlot::Simple
            | FormSlot::Progressive
            | FormSlot::Perfect
            | FormSlot::PerfectProgressive => &mut self.tenses.aspect,
            FormSlot::Indicative
            | FormSlot::Subjunctive
            | FormSlot::Conditional
            | FormSlot::Imperative
            | FormSlot::Volitional => &mut self.tenses.mood,
            FormSlot::Potential | FormSlot::Causative | FormSlot::Deontic => {
                &mut self.tenses.modals
            }
            FormSlot::Desire => &mut self.tenses.desire,
            FormSlot::Active | FormSlot::Passive => &mut self.voice,
        }
    }

    pub fn get(&self, slot: FormSlot) -> Option<&FormEntry> {
        self.group(slot).get(slot.key())
    }

    pub fn insert(&mut self, slot: FormSlot, entry: FormEntry) {
        self.group_mut(slot).insert(slot.key().to_string(), entry);
    }
}

/// Source of pre-computed forms
pub trait FormProvider: Send + Sync {
    /// Forms of a verb in the given variant, `None` when the verb is unknown
    fn forms(&self, verb: &str, negative: bool, polite: bool) -> Option<VerbForms>;
}

/// Provider slot for a construction, `None` when it is derived locally
pub fn slot_for(construction: &Construction) -> Option<FormSlot> {
    let chain = match construction {
        Construction::Volitional => return Some(FormSlot::Volitional),
        Construction::Imperative => return Some(FormSlot::Imperative),
        Construction::NegativeVolitional | Construction::Te => return None,
        Construction::Chain(chain) => chain,
    };

    if chain.voice.is_some() {
        return None;
    }

    match (chain.past, chain.aspect, chain.mood) {
        (false, None, None) => Some(FormSlot::Present),
        (true, None, None) => Some(FormSlot::Past),
        (false, Some(AspectChain::Continuous), None) => Some(FormSlot::Progressive),
        (false, None, Some(MoodChain::Conditional)) => Some(FormSlot::Conditional),
        (false, None, Some(MoodChain::Desiderative)) => Some(FormSlot::Desire),
        _ => None,
    }
}
