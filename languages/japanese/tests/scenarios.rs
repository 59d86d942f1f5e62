use katsuyo_core::language::{ConjugationRequest, Conjugator};
use katsuyo_core::types::{FormSource, Formality};
use katsuyo_lang_japanese::features::{AspectFlags, VoiceFlags};
use katsuyo_lang_japanese::{
    classify, Aspect, Construction, FeatureState, InflectionClass, JapaneseConjugator, Mood,
    Person, Tense, Toggle, Voice,
};

fn conjugate(verb: &str, features: FeatureState, formality: Formality) -> (String, String, String) {
    let engine = JapaneseConjugator::new();
    let result = engine
        .conjugate(&ConjugationRequest {
            verb: verb.to_string(),
            features,
            formality,
        })
        .unwrap();
    (result.construction, result.surface_form, result.gloss)
}

#[test]
fn taberu_is_ichidan() {
    assert_eq!(classify("食べる"), InflectionClass::RuIchidan);
}

#[test]
fn tsukuru_is_godan_ru() {
    assert_eq!(classify("作る"), InflectionClass::RuGodan);
}

#[test]
fn default_state_is_dictionary_form() {
    let (construction, surface, _) = conjugate("食べる", FeatureState::default(), Formality::Casual);
    assert_eq!(construction, "simple present");
    assert_eq!(surface, "食べる");
}

#[test]
fn potential_replaces_continuous() {
    let state = FeatureState::default()
        .toggle(Toggle::Aspect(Aspect::Continuous))
        .toggle(Toggle::Voice(Voice::Potential));
    assert!(state.voice.contains(VoiceFlags::POTENTIAL));
    assert!(!state.aspect.contains(AspectFlags::CONTINUOUS));

    let (construction, surface, gloss) = conjugate("食べる", state, Formality::Casual);
    assert_eq!(construction, "potential");
    assert_eq!(surface, "食べられる");
    assert_eq!(gloss, "I can verb");
}

#[test]
fn completion_clears_passive() {
    let state = FeatureState::default()
        .toggle(Toggle::Voice(Voice::Passive))
        .toggle(Toggle::Aspect(Aspect::Completion));
    assert!(!state.voice.contains(VoiceFlags::PASSIVE));

    let (construction, surface, _) = conjugate("飲む", state, Formality::Casual);
    assert_eq!(construction, "completion");
    assert_eq!(surface, "飲んでしまう");
}

#[test]
fn te_mood_resets_other_axes() {
    let state = FeatureState::default()
        .toggle(Toggle::Person(Person::Third))
        .toggle(Toggle::Tense(Tense::Past))
        .toggle(Toggle::Voice(Voice::Causative))
        .toggle(Toggle::Mood(Mood::Te));
    assert_eq!(state.person, Person::First);
    assert_eq!(state.tense, Tense::Simple);
    assert!(state.voice.is_empty());
    assert!(state.aspect.is_empty());

    let (construction, surface, gloss) = conjugate("飲む", state, Formality::Casual);
    assert_eq!(construction, "te form");
    assert_eq!(surface, "飲んで");
    assert_eq!(gloss, "I verb and...");
}

#[test]
fn negative_imperative_shares_negative_volitional() {
    let state = FeatureState::default()
        .toggle(Toggle::Mood(Mood::Imperative))
        .toggle(Toggle::Negative);
    let (construction, surface, _) = conjugate("行く", state, Formality::Casual);
    assert_eq!(construction, "negative volitional");
    assert_eq!(surface, "行くまい");
}

#[test]
fn kanji_kuru_keeps_kanji() {
    let negative = FeatureState::default().toggle(Toggle::Negative);
    assert_eq!(conjugate("来る", negative, Formality::Casual).1, "来ない");
    assert_eq!(conjugate("くる", negative, Formality::Casual).1, "こない");
    assert_eq!(conjugate("来る", negative, Formality::Polite).1, "来ません");
}

#[test]
fn third_person_gloss() {
    let state = FeatureState::default()
        .toggle(Toggle::Person(Person::Third))
        .toggle(Toggle::Aspect(Aspect::Continuous))
        .toggle(Toggle::Tense(Tense::Past));
    let (_, surface, gloss) = conjugate("読む", state, Formality::Standard);
    assert_eq!(surface, "読んでいた");
    assert_eq!(gloss, "They were verbing");
}

#[test]
fn direct_construction_path() {
    let engine = JapaneseConjugator::new();
    let construction: Construction = "past negative causative passive".parse().unwrap();
    let result = engine
        .conjugate_construction("待つ", &construction, Formality::Formal, Person::First)
        .unwrap();
    assert_eq!(result.surface_form, "待たせられませんでした");
    assert_eq!(result.source, FormSource::Derived);
    assert_eq!(result.gloss, "I was not made to verb");
}

#[test]
fn grid_rows_share_construction_and_gloss() {
    let engine = JapaneseConjugator::new();
    let state = FeatureState::default().toggle(Toggle::Mood(Mood::Desiderative));
    let grid = engine.grid("行く", &state).unwrap();

    assert_eq!(grid.construction, "desiderative");
    assert_eq!(grid.gloss, "I want to verb");
    let forms: Vec<&str> = grid.cells.iter().map(|c| c.surface_form.as_str()).collect();
    assert_eq!(forms, ["行きたい", "行きたい", "行きたいです", "行きたいです"]);
}
