//! Pattern tables: one recipe per construction and formality tier.
//!
//! Recipes are composed from layers at load time. The lexical verb takes
//! the first layer; every later layer inflects the auxiliary tail the
//! previous layer left behind, so a recipe is always one base derivation
//! of the dictionary verb followed by literal text.

use std::collections::HashMap;
use std::sync::LazyLock;

use katsuyo_core::types::Tier;
use serde::Serialize;

use crate::classifier::InflectionClass;
use crate::construction::{AspectChain, Chain, Construction, MoodChain, VoiceChain};
use crate::stem::{derive_base, BaseCategory, Roots};

/// Transformation recipe: base derivation then a literal suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Recipe {
    pub base: BaseCategory,
    pub roots: Roots,
    pub suffix: String,
}

impl Recipe {
    pub fn new(base: BaseCategory, roots: Roots, suffix: &str) -> Self {
        Self {
            base,
            roots,
            suffix: suffix.to_string(),
        }
    }
}

/// Inflectional form of a verbal head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VerbForm {
    Dictionary,
    Stem,
    Irrealis,
    Te,
    Ta,
    Hypothetical,
    Imperative,
    Volitional,
}

impl VerbForm {
    fn base(self) -> (BaseCategory, Roots) {
        match self {
            VerbForm::Dictionary => (BaseCategory::Dictionary, Roots::None),
            VerbForm::Stem => (BaseCategory::Stem, Roots::None),
            VerbForm::Irrealis => (BaseCategory::NegativeStem, Roots::Negative),
            VerbForm::Te => (BaseCategory::TeForm, Roots::Te),
            VerbForm::Ta => (BaseCategory::PastForm, Roots::Ta),
            VerbForm::Hypothetical => (BaseCategory::Hypothetical, Roots::Conditional),
            VerbForm::Imperative => (BaseCategory::Imperative, Roots::Command),
            VerbForm::Volitional => (BaseCategory::NegativeStem, Roots::Volitional),
        }
    }
}

/// Inflection class of an auxiliary verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuxClass {
    Regular(InflectionClass),
    /// ある: godan-ru except its irrealis, which is empty (てある → てない)
    Aru,
}

impl AuxClass {
    fn inflect(self, tail: &str, form: VerbForm) -> String {
        let (base, roots) = form.base();
        match self {
            AuxClass::Aru if form == VerbForm::Irrealis => {
                tail.strip_suffix("ある").unwrap_or(tail).to_string()
            }
            AuxClass::Aru => derive_base(tail, InflectionClass::RuGodan, base, roots),
            AuxClass::Regular(class) => derive_base(tail, class, base, roots),
        }
    }
}

/// Word class at the end of a partially built form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Head {
    Verb(AuxClass),
    Adjective,
    Nominal,
}

#[derive(Debug, Clone)]
enum Stage {
    Lexical,
    Derived { recipe: Recipe, head: Head },
}

impl Stage {
    fn extend(&self, form: VerbForm, add: &str) -> Option<Recipe> {
        match self {
            Stage::Lexical => {
                let (base, roots) = form.base();
                Some(Recipe::new(base, roots, add))
            }
            Stage::Derived {
                recipe,
                head: Head::Verb(aux),
            } => Some(Recipe {
                base: recipe.base,
                roots: recipe.roots,
                suffix: format!("{}{add}", aux.inflect(&recipe.suffix, form)),
            }),
            Stage::Derived { .. } => None,
        }
    }

    fn then(&self, form: VerbForm, add: &str, head: Head) -> Option<Stage> {
        self.extend(form, add)
            .map(|recipe| Stage::Derived { recipe, head })
    }

    fn head(&self) -> Option<Head> {
        match self {
            Stage::Lexical => None,
            Stage::Derived { head, .. } => Some(*head),
        }
    }

    fn append(&self, add: &str) -> Option<Recipe> {
        match self {
            Stage::Lexical => None,
            Stage::Derived { recipe, .. } => Some(Recipe {
                suffix: format!("{}{add}", recipe.suffix),
                ..recipe.clone()
            }),
        }
    }
}

const ICHIDAN_AUX: Head = Head::Verb(AuxClass::Regular(InflectionClass::RuIchidan));

fn voice_layer(voice: VoiceChain) -> Option<Stage> {
    let (roots, tail) = match voice {
        VoiceChain::Potential => (Roots::Potential, "る"),
        VoiceChain::Passive => (Roots::Passive, "れる"),
        VoiceChain::Causative => (Roots::Causative, "せる"),
        VoiceChain::CausativePassive | VoiceChain::PotentialCausative => {
            (Roots::Causative, "せられる")
        }
        VoiceChain::PotentialPassive => return None,
    };
    Some(Stage::Derived {
        recipe: Recipe::new(BaseCategory::NegativeStem, roots, tail),
        head: ICHIDAN_AUX,
    })
}

fn aspect_layer(stage: &Stage, aspect: AspectChain) -> Option<Stage> {
    let (aux, head) = match aspect {
        AspectChain::Continuous => ("いる", ICHIDAN_AUX),
        AspectChain::Completion => ("しまう", Head::Verb(AuxClass::Regular(InflectionClass::U))),
        AspectChain::Resultant => ("ある", Head::Verb(AuxClass::Aru)),
        AspectChain::CompletionContinuous => ("しまっている", ICHIDAN_AUX),
        AspectChain::CompletionResultant => ("しまってある", Head::Verb(AuxClass::Aru)),
        AspectChain::ContinuousResultant => return None,
    };
    stage.then(VerbForm::Te, aux, head)
}

// Conditional is applied by the finishing step, not here
fn mood_layer(stage: Stage, mood: MoodChain) -> Option<Stage> {
    match mood {
        MoodChain::Desiderative | MoodChain::ConditionalDesiderative => {
            stage.then(VerbForm::Stem, "た", Head::Adjective)
        }
        MoodChain::Deontic | MoodChain::ConditionalDeontic => {
            stage.then(VerbForm::Dictionary, "べき", Head::Nominal)
        }
        MoodChain::Conditional => Some(stage),
    }
}

// Index: negative | past << 1 | conditional << 2
const CASUAL_VERB: [(VerbForm, &str); 8] = [
    (VerbForm::Dictionary, ""),
    (VerbForm::Irrealis, "ない"),
    (VerbForm::Ta, ""),
    (VerbForm::Irrealis, "なかった"),
    (VerbForm::Hypothetical, "ば"),
    (VerbForm::Irrealis, "なければ"),
    (VerbForm::Ta, "ら"),
    (VerbForm::Irrealis, "なかったら"),
];

const POLITE_VERB: [&str; 8] = [
    "ます",
    "ません",
    "ました",
    "ませんでした",
    "ましたら",
    "ませんでしたら",
    "ましたら",
    "ませんでしたら",
];

const CASUAL_ADJECTIVE: [&str; 8] = [
    "い",
    "くない",
    "かった",
    "くなかった",
    "ければ",
    "くなければ",
    "かったら",
    "くなかったら",
];

const POLITE_ADJECTIVE: [&str; 8] = [
    "いです",
    "くないです",
    "かったです",
    "くなかったです",
    "いのでしたら",
    "くないのでしたら",
    "かったのでしたら",
    "くなかったのでしたら",
];

const CASUAL_NOMINAL: [&str; 8] = [
    "だ",
    "ではない",
    "だった",
    "ではなかった",
    "なら",
    "でないなら",
    "だったなら",
    "ではなかったなら",
];

const POLITE_NOMINAL: [&str; 8] = [
    "です",
    "ではありません",
    "でした",
    "ではありませんでした",
    "でしたら",
    "でないのでしたら",
    "でしたら",
    "ではなかったのでしたら",
];

fn finish(stage: &Stage, tier: Tier, chain: &Chain) -> Option<Recipe> {
    let conditional = chain.mood.is_some_and(MoodChain::is_conditional);
    let index =
        usize::from(chain.negative) | usize::from(chain.past) << 1 | usize::from(conditional) << 2;

    match (stage.head(), tier) {
        (None | Some(Head::Verb(_)), Tier::Casual) => {
            let (form, add) = CASUAL_VERB[index];
            stage.extend(form, add)
        }
        (None | Some(Head::Verb(_)), Tier::Polite) => stage.extend(VerbForm::Stem, POLITE_VERB[index]),
        (Some(Head::Adjective), Tier::Casual) => stage.append(CASUAL_ADJECTIVE[index]),
        (Some(Head::Adjective), Tier::Polite) => stage.append(POLITE_ADJECTIVE[index]),
        (Some(Head::Nominal), Tier::Casual) => stage.append(CASUAL_NOMINAL[index]),
        (Some(Head::Nominal), Tier::Polite) => stage.append(POLITE_NOMINAL[index]),
    }
}

fn compose_chain(chain: &Chain, tier: Tier) -> Option<Recipe> {
    let mut stage = match chain.voice {
        Some(voice) => voice_layer(voice)?,
        None => Stage::Lexical,
    };
    if let Some(aspect) = chain.aspect {
        stage = aspect_layer(&stage, aspect)?;
    }
    if let Some(mood) = chain.mood {
        stage = mood_layer(stage, mood)?;
    }
    finish(&stage, tier, chain)
}

/// Compose the recipe for a construction, `None` when it has no form
pub fn compose(construction: &Construction, tier: Tier) -> Option<Recipe> {
    let (form, add) = match (construction, tier) {
        (Construction::Chain(chain), _) => return compose_chain(chain, tier),
        (Construction::Volitional, Tier::Casual) => (VerbForm::Volitional, ""),
        (Construction::Volitional, Tier::Polite) => (VerbForm::Stem, "ましょう"),
        (Construction::NegativeVolitional, Tier::Casual) => (VerbForm::Dictionary, "まい"),
        (Construction::NegativeVolitional, Tier::Polite) => (VerbForm::Stem, "ますまい"),
        (Construction::Imperative, Tier::Casual) => (VerbForm::Imperative, ""),
        (Construction::Imperative, Tier::Polite) => (VerbForm::Stem, "なさい"),
        (Construction::Te, Tier::Casual) => (VerbForm::Te, ""),
        (Construction::Te, Tier::Polite) => (VerbForm::Stem, "まして"),
    };
    Stage::Lexical.extend(form, add)
}

/// Total mapping from every construction to a recipe or an explicit absence
#[derive(Debug)]
pub struct PatternTable {
    tier: Tier,
    recipes: HashMap<Construction, Option<Recipe>>,
}

static CASUAL_TABLE: LazyLock<PatternTable> = LazyLock::new(|| PatternTable::build(Tier::Casual));
static POLITE_TABLE: LazyLock<PatternTable> = LazyLock::new(|| PatternTable::build(Tier::Polite));

impl PatternTable {
    pub fn build(tier: Tier) -> Self {
        let recipes: HashMap<_, _> = Construction::all()
            .into_iter()
            .map(|construction| (construction, compose(&construction, tier)))
            .collect();

        let defined = recipes.values().filter(|r| r.is_some()).count();
        tracing::info!(
            "Built {} pattern table: {} recipes, {} constructions without a form",
            tier,
            defined,
            recipes.len() - defined
        );

        Self { tier, recipes }
    }

    /// Shared table for a tier, built on first use
    pub fn for_tier(tier: Tier) -> &'static PatternTable {
        match tier {
            Tier::Casual => &CASUAL_TABLE,
            Tier::Polite => &POLITE_TABLE,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn recipe(&self, construction: &Construction) -> Option<&Recipe> {
        self.recipes.get(construction).and_then(Option::as_ref)
    }

    /// Whether the construction has an entry, defined or absent
    pub fn covers(&self, construction: &Construction) -> bool {
        self.recipes.contains_key(construction)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::stem::apply_pattern;

    fn form(verb: &str, name: &str, tier: Tier) -> String {
        let construction: Construction = name.parse().unwrap();
        let recipe = PatternTable::for_tier(tier).recipe(&construction);
        apply_pattern(verb, classify(verb), recipe)
    }

    fn casual(verb: &str, name: &str) -> String {
        form(verb, name, Tier::Casual)
    }

    fn polite(verb: &str, name: &str) -> String {
        form(verb, name, Tier::Polite)
    }

    #[test]
    fn test_tables_are_total() {
        for tier in Tier::ALL {
            let table = PatternTable::for_tier(tier);
            assert_eq!(table.tier(), tier);
            assert_eq!(table.len(), Construction::all().len());
            assert!(Construction::all().iter().all(|c| table.covers(c)));
        }
    }

    #[test]
    fn test_basic_tense_and_negation() {
        assert_eq!(casual("食べる", "simple present"), "食べる");
        assert_eq!(casual("飲む", "negative"), "飲まない");
        assert_eq!(casual("飲む", "past"), "飲んだ");
        assert_eq!(casual("飲む", "past negative"), "飲まなかった");
        assert_eq!(polite("飲む", "simple present"), "飲みます");
        assert_eq!(polite("食べる", "past negative"), "食べませんでした");
    }

    #[test]
    fn test_voice() {
        assert_eq!(casual("食べる", "potential"), "食べられる");
        assert_eq!(casual("飲む", "potential"), "飲める");
        assert_eq!(casual("飲む", "passive"), "飲まれる");
        assert_eq!(casual("食べる", "passive"), "食べられる");
        assert_eq!(casual("食べる", "causative"), "食べさせる");
        assert_eq!(casual("飲む", "causative passive"), "飲ませられる");
        assert_eq!(casual("飲む", "negative potential"), "飲めない");
        assert_eq!(polite("買う", "past causative"), "買わせました");
    }

    #[test]
    fn test_aspect() {
        assert_eq!(casual("書く", "continuous"), "書いている");
        assert_eq!(polite("書く", "continuous"), "書いています");
        assert_eq!(casual("書く", "negative continuous"), "書いていない");
        assert_eq!(casual("飲む", "completion"), "飲んでしまう");
        assert_eq!(casual("飲む", "past completion"), "飲んでしまった");
        assert_eq!(casual("飲む", "negative completion"), "飲んでしまわない");
        assert_eq!(casual("書く", "resultant"), "書いてある");
        assert_eq!(casual("書く", "negative resultant"), "書いてない");
        assert_eq!(casual("書く", "past resultant"), "書いてあった");
        assert_eq!(casual("飲む", "completion continuous"), "飲んでしまっている");
        assert_eq!(casual("飲む", "potential continuous"), "飲めている");
    }

    #[test]
    fn test_mood_chains() {
        assert_eq!(casual("飲む", "conditional"), "飲めば");
        assert_eq!(casual("食べる", "conditional"), "食べれば");
        assert_eq!(casual("飲む", "past conditional"), "飲んだら");
        assert_eq!(casual("飲む", "negative conditional"), "飲まなければ");
        assert_eq!(polite("飲む", "conditional"), "飲みましたら");
        assert_eq!(casual("食べる", "desiderative"), "食べたい");
        assert_eq!(casual("食べる", "past negative desiderative"), "食べたくなかった");
        assert_eq!(polite("食べる", "desiderative"), "食べたいです");
        assert_eq!(casual("食べる", "conditional desiderative"), "食べたければ");
        assert_eq!(casual("食べる", "deontic"), "食べるべきだ");
        assert_eq!(polite("食べる", "negative deontic"), "食べるべきではありません");
        assert_eq!(casual("食べる", "conditional deontic"), "食べるべきなら");
        assert_eq!(casual("飲む", "continuous desiderative"), "飲んでいたい");
        assert_eq!(casual("書く", "resultant conditional"), "書いてあれば");
    }

    #[test]
    fn test_standalone_moods() {
        assert_eq!(casual("飲む", "volitional"), "飲もう");
        assert_eq!(casual("食べる", "volitional"), "食べよう");
        assert_eq!(polite("飲む", "volitional"), "飲みましょう");
        assert_eq!(casual("飲む", "negative volitional"), "飲むまい");
        assert_eq!(polite("飲む", "negative volitional"), "飲みますまい");
        assert_eq!(casual("待つ", "imperative"), "待て");
        assert_eq!(casual("食べる", "imperative"), "食べろ");
        assert_eq!(polite("待つ", "imperative"), "待ちなさい");
        assert_eq!(casual("泳ぐ", "te form"), "泳いで");
        assert_eq!(polite("泳ぐ", "te form"), "泳ぎまして");
    }

    #[test]
    fn test_standalone_mood_recipes() {
        assert_eq!(
            compose(&Construction::Imperative, Tier::Casual),
            Some(Recipe::new(BaseCategory::Imperative, Roots::Command, ""))
        );
        assert_eq!(
            compose(&Construction::Volitional, Tier::Casual),
            Some(Recipe::new(BaseCategory::NegativeStem, Roots::Volitional, ""))
        );
        assert_eq!(
            compose(&Construction::NegativeVolitional, Tier::Polite),
            Some(Recipe::new(BaseCategory::Stem, Roots::None, "ますまい"))
        );
    }

    #[test]
    fn test_explicitly_absent_recipes() {
        for tier in Tier::ALL {
            let table = PatternTable::for_tier(tier);
            for name in ["potential passive", "continuous resultant", "past potential passive"] {
                let construction: Construction = name.parse().unwrap();
                assert!(table.covers(&construction));
                assert!(table.recipe(&construction).is_none(), "{name}");
            }
        }
        assert_eq!(casual("飲む", "potential passive"), "飲む");
    }

    #[test]
    fn test_casual_and_polite_differ() {
        let casual_table = PatternTable::for_tier(Tier::Casual);
        let polite_table = PatternTable::for_tier(Tier::Polite);
        for construction in Construction::all() {
            let (Some(c), Some(p)) = (
                casual_table.recipe(&construction),
                polite_table.recipe(&construction),
            ) else {
                continue;
            };
            for verb in ["食べる", "飲む", "書く", "話す"] {
                let class = classify(verb);
                assert_ne!(
                    apply_pattern(verb, class, Some(c)),
                    apply_pattern(verb, class, Some(p)),
                    "{construction}"
                );
            }
        }
    }
}
