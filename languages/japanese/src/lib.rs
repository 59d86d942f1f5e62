pub mod classifier;
pub mod construction;
pub mod engine;
pub mod features;
pub mod gloss;
pub mod irregular;
pub mod patterns;
pub mod provider;
pub mod stem;
pub mod validate;

pub use classifier::{classify, InflectionClass};
pub use construction::{AspectChain, Chain, Construction, MoodChain, VoiceChain};
pub use engine::{Classification, JapaneseConjugator};
pub use features::{Aspect, FeatureState, Mood, MoodModifier, Person, Tense, Toggle, Voice};
pub use gloss::GlossResolver;
pub use irregular::{lookup_irregular, IrregularForm};
pub use patterns::{PatternTable, Recipe};
pub use provider::{FormProvider, JsonProvider, ProviderError, RuleProvider, VerbForms};
pub use stem::{apply_pattern, derive_base, BaseCategory, Roots};
