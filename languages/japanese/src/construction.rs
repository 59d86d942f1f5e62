//! Feature combination → canonical construction.
//!
//! Token order is fixed: tense, negation, voice, aspect, mood.

use std::fmt;
use std::str::FromStr;

use katsuyo_core::error::ConjugateError;
use serde::Serialize;

use crate::features::{
    AspectFlags, FeatureState, Mood, MoodModifiers, Tense, VoiceFlags,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceChain {
    Potential,
    Passive,
    Causative,
    PotentialPassive,
    PotentialCausative,
    CausativePassive,
}

impl VoiceChain {
    pub const ALL: [VoiceChain; 6] = [
        VoiceChain::Potential,
        VoiceChain::Passive,
        VoiceChain::Causative,
        VoiceChain::PotentialPassive,
        VoiceChain::PotentialCausative,
        VoiceChain::CausativePassive,
    ];

    pub fn from_flags(flags: VoiceFlags) -> Option<Self> {
        let potential = flags.contains(VoiceFlags::POTENTIAL);
        let passive = flags.contains(VoiceFlags::PASSIVE);
        let causative = flags.contains(VoiceFlags::CAUSATIVE);

        let chain = if potential && passive {
            VoiceChain::PotentialPassive
        } else if potential && causative {
            VoiceChain::PotentialCausative
        } else if causative && passive {
            VoiceChain::CausativePassive
        } else if potential {
            VoiceChain::Potential
        } else if passive {
            VoiceChain::Passive
        } else if causative {
            VoiceChain::Causative
        } else {
            return None;
        };
        Some(chain)
    }

    pub fn flags(self) -> VoiceFlags {
        match self {
            VoiceChain::Potential => VoiceFlags::POTENTIAL,
            VoiceChain::Passive => VoiceFlags::PASSIVE,
            VoiceChain::Causative => VoiceFlags::CAUSATIVE,
            VoiceChain::PotentialPassive => VoiceFlags::POTENTIAL | VoiceFlags::PASSIVE,
            VoiceChain::PotentialCausative => VoiceFlags::POTENTIAL | VoiceFlags::CAUSATIVE,
            VoiceChain::CausativePassive => VoiceFlags::CAUSATIVE | VoiceFlags::PASSIVE,
        }
    }

    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            VoiceChain::Potential => &["potential"],
            VoiceChain::Passive => &["passive"],
            VoiceChain::Causative => &["causative"],
            VoiceChain::PotentialPassive => &["potential", "passive"],
            VoiceChain::PotentialCausative => &["potential", "causative"],
            VoiceChain::CausativePassive => &["causative", "passive"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectChain {
    Continuous,
    Completion,
    Resultant,
    CompletionContinuous,
    CompletionResultant,
    ContinuousResultant,
}

impl AspectChain {
    pub const ALL: [AspectChain; 6] = [
        AspectChain::Continuous,
        AspectChain::Completion,
        AspectChain::Resultant,
        AspectChain::CompletionContinuous,
        AspectChain::CompletionResultant,
        AspectChain::ContinuousResultant,
    ];

    pub fn from_flags(flags: AspectFlags) -> Option<Self> {
        let continuous = flags.contains(AspectFlags::CONTINUOUS);
        let completion = flags.contains(AspectFlags::COMPLETION);
        let resultant = flags.contains(AspectFlags::RESULTANT);

        let chain = if completion && continuous {
            AspectChain::CompletionContinuous
        } else if completion && resultant {
            AspectChain::CompletionResultant
        } else if continuous && resultant {
            AspectChain::ContinuousResultant
        } else if continuous {
            AspectChain::Continuous
        } else if completion {
            AspectChain::Completion
        } else if resultant {
            AspectChain::Resultant
        } else {
            return None;
        };
        Some(chain)
    }

    pub fn flags(self) -> AspectFlags {
        match self {
            AspectChain::Continuous => AspectFlags::CONTINUOUS,
            AspectChain::Completion => AspectFlags::COMPLETION,
            AspectChain::Resultant => AspectFlags::RESULTANT,
            AspectChain::CompletionContinuous => {
                AspectFlags::COMPLETION | AspectFlags::CONTINUOUS
            }
            AspectChain::CompletionResultant => AspectFlags::COMPLETION | AspectFlags::RESULTANT,
            AspectChain::ContinuousResultant => AspectFlags::CONTINUOUS | AspectFlags::RESULTANT,
        }
    }

    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            AspectChain::Continuous => &["continuous"],
            AspectChain::Completion => &["completion"],
            AspectChain::Resultant => &["resultant"],
            AspectChain::CompletionContinuous => &["completion", "continuous"],
            AspectChain::CompletionResultant => &["completion", "resultant"],
            AspectChain::ContinuousResultant => &["continuous", "resultant"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodChain {
    Conditional,
    Desiderative,
    Deontic,
    ConditionalDesiderative,
    ConditionalDeontic,
}

impl MoodChain {
    pub const ALL: [MoodChain; 5] = [
        MoodChain::Conditional,
        MoodChain::Desiderative,
        MoodChain::Deontic,
        MoodChain::ConditionalDesiderative,
        MoodChain::ConditionalDeontic,
    ];

    pub fn from_flags(flags: MoodModifiers) -> Option<Self> {
        let conditional = flags.contains(MoodModifiers::CONDITIONAL);
        let desiderative = flags.contains(MoodModifiers::DESIDERATIVE);
        let deontic = flags.contains(MoodModifiers::DEONTIC);

        let chain = if conditional && desiderative {
            MoodChain::ConditionalDesiderative
        } else if conditional && deontic {
            MoodChain::ConditionalDeontic
        } else if desiderative {
            MoodChain::Desiderative
        } else if deontic {
            MoodChain::Deontic
        } else if conditional {
            MoodChain::Conditional
        } else {
            return None;
        };
        Some(chain)
    }

    pub fn flags(self) -> MoodModifiers {
        match self {
            MoodChain::Conditional => MoodModifiers::CONDITIONAL,
            MoodChain::Desiderative => MoodModifiers::DESIDERATIVE,
            MoodChain::Deontic => MoodModifiers::DEONTIC,
            MoodChain::ConditionalDesiderative => {
                MoodModifiers::CONDITIONAL | MoodModifiers::DESIDERATIVE
            }
            MoodChain::ConditionalDeontic => MoodModifiers::CONDITIONAL | MoodModifiers::DEONTIC,
        }
    }

    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            MoodChain::Conditional => &["conditional"],
            MoodChain::Desiderative => &["desiderative"],
            MoodChain::Deontic => &["deontic"],
            MoodChain::ConditionalDesiderative => &["conditional", "desiderative"],
            MoodChain::ConditionalDeontic => &["conditional", "deontic"],
        }
    }

    /// Whether the outermost layer is the conditional
    pub fn is_conditional(self) -> bool {
        self.flags().contains(MoodModifiers::CONDITIONAL)
    }
}

/// A compositional construction; the default value is the simple present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Chain {
    pub past: bool,
    pub negative: bool,
    pub voice: Option<VoiceChain>,
    pub aspect: Option<AspectChain>,
    pub mood: Option<MoodChain>,
}

impl Chain {
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        if self.past {
            tokens.push("past");
        }
        if self.negative {
            tokens.push("negative");
        }
        if let Some(voice) = self.voice {
            tokens.extend_from_slice(voice.tokens());
        }
        if let Some(aspect) = self.aspect {
            tokens.extend_from_slice(aspect.tokens());
        }
        if let Some(mood) = self.mood {
            tokens.extend_from_slice(mood.tokens());
        }
        tokens
    }

    pub fn is_simple_present(&self) -> bool {
        *self == Chain::default()
    }
}

/// Canonical name of one grammatical feature combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Construction {
    Chain(Chain),
    Volitional,
    /// Shared by negated volitional and negated imperative
    NegativeVolitional,
    Imperative,
    Te,
}

impl Default for Construction {
    fn default() -> Self {
        Construction::Chain(Chain::default())
    }
}

const SIMPLE_PRESENT: &str = "simple present";

impl Construction {
    /// Resolve a normalized feature state
    pub fn resolve(state: &FeatureState) -> Self {
        let modifiers = if state.mood == Mood::Plain {
            state.modifiers
        } else {
            MoodModifiers::empty()
        };
        let bare = state.voice.is_empty() && state.aspect.is_empty() && modifiers.is_empty();
        let past = state.tense == Tense::Past;

        match state.mood {
            Mood::Volitional | Mood::Imperative if bare && state.negative => {
                return Construction::NegativeVolitional;
            }
            Mood::Volitional if bare => return Construction::Volitional,
            Mood::Imperative if bare => return Construction::Imperative,
            Mood::Te if bare && !state.negative && !past => return Construction::Te,
            _ => {}
        }

        let mood_flags = match state.mood {
            Mood::Conditional | Mood::Desiderative | Mood::Deontic => {
                state.effective_modifiers()
            }
            // volitional, imperative and te carrying other flags fall back to the chain
            _ => modifiers,
        };

        Construction::Chain(Chain {
            past,
            negative: state.negative,
            voice: VoiceChain::from_flags(state.voice),
            aspect: AspectChain::from_flags(state.aspect),
            mood: MoodChain::from_flags(mood_flags),
        })
    }

    /// Lowercase name used for derivation; the empty chain is "simple present"
    pub fn name(&self) -> String {
        match self {
            Construction::Chain(chain) if chain.is_simple_present() => SIMPLE_PRESENT.to_string(),
            Construction::Chain(chain) => chain.tokens().join(" "),
            Construction::Volitional => "volitional".to_string(),
            Construction::NegativeVolitional => "negative volitional".to_string(),
            Construction::Imperative => "imperative".to_string(),
            Construction::Te => "te form".to_string(),
        }
    }

    /// Title Case key used for gloss lookup; the empty chain is ""
    pub fn gloss_key(&self) -> String {
        match self {
            Construction::Chain(chain) => chain
                .tokens()
                .iter()
                .map(|t| title_case(t))
                .collect::<Vec<_>>()
                .join(" "),
            Construction::Volitional => "Volitional".to_string(),
            Construction::NegativeVolitional => "Negative Volitional".to_string(),
            Construction::Imperative => "Imperative".to_string(),
            Construction::Te => "T-Form".to_string(),
        }
    }

    pub fn chain(&self) -> Option<&Chain> {
        match self {
            Construction::Chain(chain) => Some(chain),
            _ => None,
        }
    }

    pub fn has_voice(&self) -> bool {
        self.chain().is_some_and(|c| c.voice.is_some())
    }

    /// Feature state that resolves back to this construction
    pub fn to_features(&self) -> FeatureState {
        match self {
            Construction::Chain(chain) => FeatureState {
                tense: if chain.past { Tense::Past } else { Tense::Simple },
                negative: chain.negative,
                voice: chain.voice.map(VoiceChain::flags).unwrap_or_default(),
                aspect: chain.aspect.map(AspectChain::flags).unwrap_or_default(),
                modifiers: chain.mood.map(MoodChain::flags).unwrap_or_default(),
                ..FeatureState::default()
            },
            Construction::Volitional => FeatureState {
                mood: Mood::Volitional,
                ..FeatureState::default()
            },
            Construction::NegativeVolitional => FeatureState {
                mood: Mood::Volitional,
                negative: true,
                ..FeatureState::default()
            },
            Construction::Imperative => FeatureState {
                mood: Mood::Imperative,
                ..FeatureState::default()
            },
            Construction::Te => FeatureState {
                mood: Mood::Te,
                ..FeatureState::default()
            },
        }
    }

    /// Every construction: all chains plus the four standalone moods
    pub fn all() -> Vec<Construction> {
        let voices = std::iter::once(None).chain(VoiceChain::ALL.map(Some));
        let mut all = Vec::new();

        for past in [false, true] {
            for negative in [false, true] {
                for voice in voices.clone() {
                    for aspect in std::iter::once(None).chain(AspectChain::ALL.map(Some)) {
                        for mood in std::iter::once(None).chain(MoodChain::ALL.map(Some)) {
                            all.push(Construction::Chain(Chain {
                                past,
                                negative,
                                voice,
                                aspect,
                                mood,
                            }));
                        }
                    }
                }
            }
        }

        all.extend([
            Construction::Volitional,
            Construction::NegativeVolitional,
            Construction::Imperative,
            Construction::Te,
        ]);
        all
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Construction {
    type Err = ConjugateError;

    /// Parses a derivation name or a gloss key, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .replace('-', " ")
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>();
        let joined = normalized.join(" ");

        match joined.as_str() {
            "" | SIMPLE_PRESENT => return Ok(Construction::default()),
            "volitional" => return Ok(Construction::Volitional),
            "negative volitional" | "negative imperative" => {
                return Ok(Construction::NegativeVolitional);
            }
            "imperative" => return Ok(Construction::Imperative),
            "te" | "te form" | "t form" => return Ok(Construction::Te),
            _ => {}
        }

        let mut state = FeatureState::default();
        for token in &normalized {
            match token.as_str() {
                "past" => state.tense = Tense::Past,
                "negative" => state.negative = true,
                "potential" => state.voice |= VoiceFlags::POTENTIAL,
                "passive" => state.voice |= VoiceFlags::PASSIVE,
                "causative" => state.voice |= VoiceFlags::CAUSATIVE,
                "continuous" => state.aspect |= AspectFlags::CONTINUOUS,
                "completion" => state.aspect |= AspectFlags::COMPLETION,
                "resultant" => state.aspect |= AspectFlags::RESULTANT,
                "conditional" | "conitional" => state.modifiers |= MoodModifiers::CONDITIONAL,
                "desiderative" => state.modifiers |= MoodModifiers::DESIDERATIVE,
                "deontic" => state.modifiers |= MoodModifiers::DEONTIC,
                _ => return Err(ConjugateError::InvalidConstruction(s.to_string())),
            }
        }

        let construction = Construction::resolve(&state);
        let mut expected = construction
            .chain()
            .map(Chain::tokens)
            .unwrap_or_default();
        let mut given: Vec<&str> = normalized
            .iter()
            .map(|t| if t == "conitional" { "conditional" } else { t.as_str() })
            .collect();
        expected.sort_unstable();
        given.sort_unstable();

        // duplicates or combinations without a canonical name
        if expected != given {
            return Err(ConjugateError::InvalidConstruction(s.to_string()));
        }
        Ok(construction)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
