use katsuyo_core::types::Formality;
use katsuyo_lang_japanese::features::{AspectFlags, MoodModifiers, VoiceFlags};
use katsuyo_lang_japanese::{
    classify, Aspect, Construction, FeatureState, JapaneseConjugator, Mood, MoodModifier, Person,
    Tense, Toggle, Voice,
};
use proptest::prelude::*;
use proptest::sample::select;

fn all_toggles() -> Vec<Toggle> {
    let mut toggles = vec![Toggle::Negative];
    toggles.extend([Person::First, Person::Second, Person::Third].map(Toggle::Person));
    toggles.extend([Tense::Simple, Tense::Past].map(Toggle::Tense));
    toggles.extend([Voice::Potential, Voice::Passive, Voice::Causative].map(Toggle::Voice));
    toggles.extend([Aspect::Continuous, Aspect::Completion, Aspect::Resultant].map(Toggle::Aspect));
    toggles.extend(
        [
            Mood::Plain,
            Mood::Te,
            Mood::Volitional,
            Mood::Imperative,
            Mood::Deontic,
            Mood::Desiderative,
            Mood::Conditional,
        ]
        .map(Toggle::Mood),
    );
    toggles.extend(
        [
            MoodModifier::Conditional,
            MoodModifier::Desiderative,
            MoodModifier::Deontic,
        ]
        .map(Toggle::Modifier),
    );
    toggles
}

fn reachable_state() -> impl Strategy<Value = FeatureState> {
    prop::collection::vec(select(all_toggles()), 0..40)
        .prop_map(|toggles| FeatureState::default().replay(toggles))
}

proptest! {
    #[test]
    fn forbidden_combinations_never_reachable(state in reachable_state()) {
        let completion = state.aspect.contains(AspectFlags::COMPLETION);
        let continuous = state.aspect.contains(AspectFlags::CONTINUOUS);
        let potential = state.voice.contains(VoiceFlags::POTENTIAL);

        prop_assert!(!(completion && state.voice.contains(VoiceFlags::PASSIVE)));
        prop_assert!(!(completion && state.voice.contains(VoiceFlags::CAUSATIVE)));
        prop_assert!(!(potential && continuous));
        prop_assert!(!(potential && state.voice.intersects(VoiceFlags::PASSIVE | VoiceFlags::CAUSATIVE)));
        prop_assert!(!(continuous && state.aspect.contains(AspectFlags::RESULTANT)));
        prop_assert!(!(completion
            && potential
            && continuous
            && state.effective_modifiers().contains(MoodModifiers::DEONTIC)));
    }

    #[test]
    fn modifiers_only_under_plain_mood(state in reachable_state()) {
        if state.mood != Mood::Plain {
            prop_assert!(state.modifiers.is_empty());
        }
    }

    #[test]
    fn te_mood_is_bare(state in reachable_state()) {
        if state.mood == Mood::Te {
            prop_assert_eq!(state.person, Person::First);
            prop_assert_eq!(state.tense, Tense::Simple);
            prop_assert!(state.voice.is_empty());
            prop_assert!(state.aspect.is_empty());
        }
    }

    #[test]
    fn reachable_states_are_normalized(state in reachable_state()) {
        prop_assert_eq!(state.normalized(), state);
    }

    #[test]
    fn resolve_is_idempotent(state in reachable_state()) {
        let construction = Construction::resolve(&state);
        prop_assert_eq!(Construction::resolve(&construction.to_features()), construction);
        prop_assert_eq!(construction.name().parse::<Construction>(), Ok(construction));
    }

    #[test]
    fn classify_is_total_and_deterministic(verb in "\\PC{0,6}") {
        prop_assert_eq!(classify(&verb), classify(&verb));
    }

    #[test]
    fn derivation_never_fails(
        state in reachable_state(),
        verb in "[ぁ-ん]{1,4}[るうくぐすつぬぶむ]",
        formality in select(Formality::ALL.to_vec()),
    ) {
        let engine = JapaneseConjugator::new();
        let construction = Construction::resolve(&state);
        let result = engine.derive(&verb, &construction, formality, state.person);
        prop_assert_eq!(result.construction, construction.name());
        prop_assert!(!result.gloss.is_empty());
    }
}
