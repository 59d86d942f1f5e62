//! Grammatical feature toggles and their mutual-exclusion rules.
//!
//! [`FeatureState`] is a plain value: every toggle returns a new, fully
//! normalized state and nothing is kept between requests.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    #[default]
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    #[default]
    Simple,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Potential,
    Passive,
    Causative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Continuous,
    Completion,
    Resultant,
}

/// Base mood; exactly one is always selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Plain,
    Te,
    Volitional,
    Imperative,
    Deontic,
    Desiderative,
    Conditional,
}

/// Secondary mood layered on the plain mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodModifier {
    Conditional,
    Desiderative,
    Deontic,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct VoiceFlags: u8 {
        const POTENTIAL = 1;
        const PASSIVE = 1 << 1;
        const CAUSATIVE = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct AspectFlags: u8 {
        const CONTINUOUS = 1;
        const COMPLETION = 1 << 1;
        const RESULTANT = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MoodModifiers: u8 {
        const CONDITIONAL = 1;
        const DESIDERATIVE = 1 << 1;
        const DEONTIC = 1 << 2;
    }
}

impl From<Voice> for VoiceFlags {
    fn from(voice: Voice) -> Self {
        match voice {
            Voice::Potential => VoiceFlags::POTENTIAL,
            Voice::Passive => VoiceFlags::PASSIVE,
            Voice::Causative => VoiceFlags::CAUSATIVE,
        }
    }
}

impl From<Aspect> for AspectFlags {
    fn from(aspect: Aspect) -> Self {
        match aspect {
            Aspect::Continuous => AspectFlags::CONTINUOUS,
            Aspect::Completion => AspectFlags::COMPLETION,
            Aspect::Resultant => AspectFlags::RESULTANT,
        }
    }
}

impl From<MoodModifier> for MoodModifiers {
    fn from(modifier: MoodModifier) -> Self {
        match modifier {
            MoodModifier::Conditional => MoodModifiers::CONDITIONAL,
            MoodModifier::Desiderative => MoodModifiers::DESIDERATIVE,
            MoodModifier::Deontic => MoodModifiers::DEONTIC,
        }
    }
}

/// A single user action on the feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axis", content = "value", rename_all = "lowercase")]
pub enum Toggle {
    Person(Person),
    Tense(Tense),
    Voice(Voice),
    Aspect(Aspect),
    Mood(Mood),
    Modifier(MoodModifier),
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FeatureState {
    pub person: Person,
    pub tense: Tense,
    pub voice: VoiceFlags,
    pub aspect: AspectFlags,
    pub mood: Mood,
    pub modifiers: MoodModifiers,
    pub negative: bool,
}

impl FeatureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one toggle and return the normalized result
    pub fn toggle(self, toggle: Toggle) -> Self {
        match toggle {
            Toggle::Mood(mood) => self.select_mood(mood),
            Toggle::Modifier(modifier) => self.toggle_modifier(modifier),
            Toggle::Person(person) => {
                if self.person == person {
                    return self;
                }
                let mut next = self.leave_te();
                next.person = person;
                next.sweep()
            }
            Toggle::Tense(tense) => {
                if self.tense == tense {
                    return self;
                }
                let mut next = self.leave_te();
                next.tense = tense;
                next.sweep()
            }
            Toggle::Voice(voice) => self.leave_te().toggle_voice(voice).sweep(),
            Toggle::Aspect(aspect) => self.leave_te().toggle_aspect(aspect).sweep(),
            Toggle::Negative => {
                let mut next = self.leave_te();
                next.negative = !next.negative;
                next.sweep()
            }
        }
    }

    /// Replay a toggle sequence from this state
    pub fn replay<I>(self, toggles: I) -> Self
    where
        I: IntoIterator<Item = Toggle>,
    {
        toggles.into_iter().fold(self, FeatureState::toggle)
    }

    /// Select a base mood; clears modifiers, te also resets person, tense, voice and aspect
    pub fn select_mood(self, mood: Mood) -> Self {
        if self.mood == mood && self.modifiers.is_empty() {
            return self;
        }

        let mut next = self;
        next.mood = mood;
        next.modifiers = MoodModifiers::empty();

        if mood == Mood::Te {
            next.person = Person::First;
            next.tense = Tense::Simple;
            next.voice = VoiceFlags::empty();
            next.aspect = AspectFlags::empty();
        }

        next.sweep()
    }

    /// Flip a secondary mood; ignored unless the base mood is plain
    pub fn toggle_modifier(self, modifier: MoodModifier) -> Self {
        if self.mood != Mood::Plain {
            return self;
        }
        let mut next = self;
        next.modifiers.toggle(modifier.into());
        next.sweep()
    }

    /// Run the forbidden-combination sweep over a hand-built state
    pub fn normalized(self) -> Self {
        let mut next = self;
        if next.mood != Mood::Plain {
            next.modifiers = MoodModifiers::empty();
        }
        next.sweep()
    }

    /// Modifiers in effect, counting a modifier-like base mood
    pub fn effective_modifiers(&self) -> MoodModifiers {
        let base = match self.mood {
            Mood::Conditional => MoodModifiers::CONDITIONAL,
            Mood::Desiderative => MoodModifiers::DESIDERATIVE,
            Mood::Deontic => MoodModifiers::DEONTIC,
            _ => MoodModifiers::empty(),
        };
        self.modifiers | base
    }

    pub fn is_past(&self) -> bool {
        self.tense == Tense::Past
    }

    fn leave_te(self) -> Self {
        let mut next = self;
        if next.mood == Mood::Te {
            next.mood = Mood::Plain;
        }
        next
    }

    fn toggle_voice(self, voice: Voice) -> Self {
        let mut next = self;
        let flag = VoiceFlags::from(voice);

        if next.voice.contains(flag) {
            next.voice.remove(flag);
            return next;
        }

        match voice {
            Voice::Potential => {
                next.voice.remove(VoiceFlags::PASSIVE | VoiceFlags::CAUSATIVE);
                next.aspect.remove(AspectFlags::CONTINUOUS);
            }
            Voice::Passive | Voice::Causative => next.voice.remove(VoiceFlags::POTENTIAL),
        }
        next.voice.insert(flag);
        next
    }

    fn toggle_aspect(self, aspect: Aspect) -> Self {
        let mut next = self;
        let flag = AspectFlags::from(aspect);

        if next.aspect.contains(flag) {
            next.aspect.remove(flag);
            return next;
        }

        match aspect {
            Aspect::Continuous => {
                next.aspect.remove(AspectFlags::RESULTANT);
                next.voice.remove(VoiceFlags::POTENTIAL);
            }
            Aspect::Resultant => next.aspect.remove(AspectFlags::CONTINUOUS),
            Aspect::Completion => {}
        }
        next.aspect.insert(flag);
        next
    }

    // Earlier rules win by clearing the later flag
    fn sweep(self) -> Self {
        let mut next = self;
        let completion = next.aspect.contains(AspectFlags::COMPLETION);

        if completion && next.voice.contains(VoiceFlags::PASSIVE) {
            next.voice.remove(VoiceFlags::PASSIVE);
        }
        if completion && next.voice.contains(VoiceFlags::CAUSATIVE) {
            next.voice.remove(VoiceFlags::CAUSATIVE);
        }
        if next.voice.contains(VoiceFlags::POTENTIAL)
            && next.aspect.contains(AspectFlags::CONTINUOUS)
        {
            next.aspect.remove(AspectFlags::CONTINUOUS);
        }
        if completion
            && next.voice.contains(VoiceFlags::PASSIVE)
            && next.aspect.contains(AspectFlags::CONTINUOUS)
        {
            next.aspect.remove(AspectFlags::CONTINUOUS);
        }
        if completion
            && next.voice.contains(VoiceFlags::CAUSATIVE | VoiceFlags::PASSIVE)
            && next.aspect.contains(AspectFlags::CONTINUOUS)
        {
            next.aspect.remove(AspectFlags::CONTINUOUS);
        }
        if completion
            && next.voice.contains(VoiceFlags::POTENTIAL)
            && next.aspect.contains(AspectFlags::CONTINUOUS)
            && next.effective_modifiers().contains(MoodModifiers::DEONTIC)
        {
            if next.mood == Mood::Deontic {
                next.mood = Mood::Plain;
            }
            next.modifiers.remove(MoodModifiers::DEONTIC);
        }

        next
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Person(p) => write!(f, "person={}", serde_name(p)),
            Toggle::Tense(t) => write!(f, "tense={}", serde_name(t)),
            Toggle::Voice(v) => write!(f, "voice={}", serde_name(v)),
            Toggle::Aspect(a) => write!(f, "aspect={}", serde_name(a)),
            Toggle::Mood(m) => write!(f, "mood={}", serde_name(m)),
            Toggle::Modifier(m) => write!(f, "modifier={}", serde_name(m)),
            Toggle::Negative => f.write_str("negative"),
        }
    }
}

fn serde_name<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn parse_value<T: for<'de> Deserialize<'de>>(axis: &str, value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown {axis}: {value}"))
}

impl FromStr for Person {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value("person", &s.trim().to_lowercase())
    }
}

impl FromStr for Toggle {
    type Err = String;

    /// Parses `AXIS=VALUE` (e.g. `voice=potential`) or the bare word `negative`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "negative" {
            return Ok(Toggle::Negative);
        }

        let (axis, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected AXIS=VALUE, got: {s}"))?;
        let (axis, value) = (axis.trim(), value.trim());

        match axis {
            "person" => parse_value(axis, value).map(Toggle::Person),
            "tense" => parse_value(axis, value).map(Toggle::Tense),
            "voice" => parse_value(axis, value).map(Toggle::Voice),
            "aspect" => parse_value(axis, value).map(Toggle::Aspect),
            "mood" => parse_value(axis, value).map(Toggle::Mood),
            "modifier" => parse_value(axis, value).map(Toggle::Modifier),
            other => Err(format!("unknown axis: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FeatureState::new();
        assert_eq!(state.person, Person::First);
        assert_eq!(state.tense, Tense::Simple);
        assert_eq!(state.mood, Mood::Plain);
        assert!(state.voice.is_empty());
        assert!(state.aspect.is_empty());
        assert!(!state.negative);
    }

    #[test]
    fn test_person_parse() {
        assert_eq!("Third".parse::<Person>(), Ok(Person::Third));
        assert!("fourth".parse::<Person>().is_err());
    }

    #[test]
    fn test_reselecting_person_or_tense_is_ignored() {
        let state = FeatureState::new().toggle(Toggle::Tense(Tense::Simple));
        assert_eq!(state, FeatureState::new());

        let te = FeatureState::new().toggle(Toggle::Mood(Mood::Te));
        assert_eq!(te.toggle(Toggle::Person(Person::First)).mood, Mood::Te);
    }

    #[test]
    fn test_potential_clears_continuous() {
        let state = FeatureState::new()
            .toggle(Toggle::Aspect(Aspect::Continuous))
            .toggle(Toggle::Voice(Voice::Potential));
        assert_eq!(state.voice, VoiceFlags::POTENTIAL);
        assert!(!state.aspect.contains(AspectFlags::CONTINUOUS));
    }

    #[test]
    fn test_continuous_clears_potential_and_resultant() {
        let state = FeatureState::new()
            .toggle(Toggle::Voice(Voice::Potential))
            .toggle(Toggle::Aspect(Aspect::Resultant))
            .toggle(Toggle::Aspect(Aspect::Continuous));
        assert!(state.voice.is_empty());
        assert_eq!(state.aspect, AspectFlags::CONTINUOUS);
    }

    #[test]
    fn test_passive_and_causative_combine() {
        let state = FeatureState::new()
            .toggle(Toggle::Voice(Voice::Causative))
            .toggle(Toggle::Voice(Voice::Passive));
        assert_eq!(state.voice, VoiceFlags::CAUSATIVE | VoiceFlags::PASSIVE);

        let state = state.toggle(Toggle::Voice(Voice::Potential));
        assert_eq!(state.voice, VoiceFlags::POTENTIAL);
    }

    #[test]
    fn test_completion_clears_passive() {
        let state = FeatureState::new()
            .toggle(Toggle::Voice(Voice::Passive))
            .toggle(Toggle::Aspect(Aspect::Completion));
        assert!(state.voice.is_empty());
        assert_eq!(state.aspect, AspectFlags::COMPLETION);
    }

    #[test]
    fn test_completion_blocks_causative() {
        let state = FeatureState::new()
            .toggle(Toggle::Aspect(Aspect::Completion))
            .toggle(Toggle::Voice(Voice::Causative));
        assert!(state.voice.is_empty());
    }

    #[test]
    fn test_te_mood_resets_axes() {
        let state = FeatureState::new()
            .toggle(Toggle::Person(Person::Third))
            .toggle(Toggle::Tense(Tense::Past))
            .toggle(Toggle::Voice(Voice::Causative))
            .toggle(Toggle::Voice(Voice::Passive))
            .toggle(Toggle::Aspect(Aspect::Resultant))
            .toggle(Toggle::Mood(Mood::Te));
        assert_eq!(state.person, Person::First);
        assert_eq!(state.tense, Tense::Simple);
        assert!(state.voice.is_empty());
        assert!(state.aspect.is_empty());
        assert_eq!(state.mood, Mood::Te);
    }

    #[test]
    fn test_te_mood_left_on_other_toggle() {
        let state = FeatureState::new()
            .toggle(Toggle::Mood(Mood::Te))
            .toggle(Toggle::Negative);
        assert_eq!(state.mood, Mood::Plain);
        assert!(state.negative);
    }

    #[test]
    fn test_modifiers_only_under_plain() {
        let state = FeatureState::new()
            .toggle(Toggle::Mood(Mood::Volitional))
            .toggle(Toggle::Modifier(MoodModifier::Conditional));
        assert!(state.modifiers.is_empty());

        let state = FeatureState::new()
            .toggle(Toggle::Modifier(MoodModifier::Conditional))
            .toggle(Toggle::Modifier(MoodModifier::Desiderative));
        assert_eq!(
            state.modifiers,
            MoodModifiers::CONDITIONAL | MoodModifiers::DESIDERATIVE
        );

        let state = state.toggle(Toggle::Mood(Mood::Plain));
        assert!(state.modifiers.is_empty());
    }

    #[test]
    fn test_effective_modifiers_include_base_mood() {
        let state = FeatureState::new().toggle(Toggle::Mood(Mood::Deontic));
        assert_eq!(state.effective_modifiers(), MoodModifiers::DEONTIC);
    }

    #[test]
    fn test_normalized_applies_sweep() {
        let state = FeatureState {
            voice: VoiceFlags::POTENTIAL,
            aspect: AspectFlags::COMPLETION | AspectFlags::CONTINUOUS,
            mood: Mood::Deontic,
            ..FeatureState::default()
        }
        .normalized();
        assert!(!state.aspect.contains(AspectFlags::CONTINUOUS));
        assert_eq!(state.mood, Mood::Deontic);
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!("negative".parse(), Ok(Toggle::Negative));
        assert_eq!("voice=potential".parse(), Ok(Toggle::Voice(Voice::Potential)));
        assert_eq!("Mood = Te".parse(), Ok(Toggle::Mood(Mood::Te)));
        assert_eq!(
            "modifier=desiderative".parse(),
            Ok(Toggle::Modifier(MoodModifier::Desiderative))
        );
        assert!("voice=loud".parse::<Toggle>().is_err());
        assert!("potential".parse::<Toggle>().is_err());
    }

    #[test]
    fn test_toggle_display_round_trip() {
        let toggle = Toggle::Aspect(Aspect::Completion);
        assert_eq!(toggle.to_string(), "aspect=completion");
        assert_eq!(toggle.to_string().parse(), Ok(toggle));
    }
}
