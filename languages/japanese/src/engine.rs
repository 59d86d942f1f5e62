use katsuyo_core::error::ConjugateError;
use katsuyo_core::language::{ConjugationRequest, Conjugator};
use katsuyo_core::preprocess::{DefaultPreprocessor, Preprocessor};
use katsuyo_core::types::{ConjugationResult, Fallback, FormSource, Formality, Tier};
use serde::Serialize;

use crate::classifier::{classify, try_classify, InflectionClass};
use crate::construction::Construction;
use crate::features::{FeatureState, Person};
use crate::gloss::GlossResolver;
use crate::irregular::{self, IrregularForm};
use crate::patterns::PatternTable;
use crate::provider::{self, FormProvider};
use crate::stem::apply_pattern;
use crate::validate::validate_verb;

/// How a verb inflects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub verb: String,
    pub irregular: bool,
    /// `None` for irregular verbs, whose table overrides the class
    pub class: Option<InflectionClass>,
}

/// Japanese verb conjugation engine
pub struct JapaneseConjugator {
    preprocessor: DefaultPreprocessor,
    gloss: GlossResolver,
    provider: Option<Box<dyn FormProvider>>,
}

impl Default for JapaneseConjugator {
    fn default() -> Self {
        Self::new()
    }
}

impl JapaneseConjugator {
    pub fn new() -> Self {
        Self {
            preprocessor: DefaultPreprocessor,
            gloss: GlossResolver::new(),
            provider: None,
        }
    }

    /// Consult a provider for the forms it pre-computes
    pub fn with_provider(mut self, provider: Box<dyn FormProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_gloss_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.gloss = GlossResolver::with_fallback(fallback);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Normalize and validate a raw verb
    pub fn prepare(&self, verb: &str) -> Result<String, ConjugateError> {
        let verb = self.preprocessor.process(verb);
        validate_verb(&verb)?;
        Ok(verb)
    }

    pub fn classify(&self, verb: &str) -> Result<Classification, ConjugateError> {
        let verb = self.prepare(verb)?;
        let irregular = irregular::is_irregular(&verb);
        Ok(Classification {
            class: (!irregular).then(|| classify(&verb)),
            irregular,
            verb,
        })
    }

    /// Conjugate a construction directly, bypassing the feature toggles
    pub fn conjugate_construction(
        &self,
        verb: &str,
        construction: &Construction,
        formality: Formality,
        person: Person,
    ) -> Result<ConjugationResult, ConjugateError> {
        let verb = self.prepare(verb)?;
        Ok(self.derive(&verb, construction, formality, person))
    }

    /// Derive without validation; never fails, soft failures are recorded
    pub fn derive(
        &self,
        verb: &str,
        construction: &Construction,
        formality: Formality,
        person: Person,
    ) -> ConjugationResult {
        let tier = formality.tier();
        let mut fallbacks = Vec::new();

        let (surface_form, source) = match self.from_provider(verb, construction, tier) {
            Some(form) => (form, FormSource::Provider),
            None => self.derive_locally(verb, construction, tier, &mut fallbacks),
        };

        let gloss = self.gloss.gloss(&construction.gloss_key(), person);
        if gloss.missing {
            fallbacks.push(Fallback::MissingGloss {
                construction: construction.gloss_key(),
            });
        }

        ConjugationResult {
            construction: construction.name(),
            surface_form,
            gloss: gloss.text,
            source,
            fallbacks,
        }
    }

    fn from_provider(&self, verb: &str, construction: &Construction, tier: Tier) -> Option<String> {
        let provider = self.provider.as_ref()?;
        let slot = provider::slot_for(construction)?;
        let negative = construction.chain().is_some_and(|c| c.negative);

        let form = provider
            .forms(verb, negative, tier == Tier::Polite)
            .and_then(|forms| forms.get(slot).map(|e| e.japanese.clone()))
            .filter(|japanese| !japanese.is_empty());

        if form.is_none() {
            tracing::debug!("Provider has no {:?} form for {}, deriving locally", slot, verb);
        }
        form
    }

    fn derive_locally(
        &self,
        verb: &str,
        construction: &Construction,
        tier: Tier,
        fallbacks: &mut Vec<Fallback>,
    ) -> (String, FormSource) {
        if let Some(form) = irregular::lookup_irregular(verb, construction, formality_of(tier)) {
            return match form {
                IrregularForm::Found(form) => (form, FormSource::Irregular),
                IrregularForm::NotFound => {
                    tracing::warn!("Irregular {} has no {} form for '{}'", verb, tier, construction);
                    fallbacks.push(Fallback::MissingIrregularCell {
                        verb: verb.to_string(),
                        construction: construction.name(),
                        tier,
                    });
                    (String::new(), FormSource::Irregular)
                }
            };
        }

        let class = match try_classify(verb) {
            Some(class) => class,
            None => {
                fallbacks.push(Fallback::UnclassifiableVerb {
                    verb: verb.to_string(),
                });
                classify(verb)
            }
        };

        match PatternTable::for_tier(tier).recipe(construction) {
            Some(recipe) => (apply_pattern(verb, class, Some(recipe)), FormSource::Derived),
            None => {
                tracing::warn!("No {} pattern for '{}', returning {} unmodified", tier, construction, verb);
                fallbacks.push(Fallback::MissingPattern {
                    construction: construction.name(),
                    tier,
                });
                (apply_pattern(verb, class, None), FormSource::Unmodified)
            }
        }
    }
}

// Any formality of the tier selects the same table
fn formality_of(tier: Tier) -> Formality {
    match tier {
        Tier::Casual => Formality::Casual,
        Tier::Polite => Formality::Polite,
    }
}

impl Conjugator for JapaneseConjugator {
    type Features = FeatureState;

    fn language_code(&self) -> &str {
        "ja"
    }

    fn conjugate(
        &self,
        request: &ConjugationRequest<FeatureState>,
    ) -> Result<ConjugationResult, ConjugateError> {
        let verb = self.prepare(&request.verb)?;
        let state = request.features.normalized();
        let construction = Construction::resolve(&state);

        tracing::debug!(
            "Conjugating {} as '{}' ({})",
            verb,
            construction,
            request.formality
        );

        Ok(self.derive(&verb, &construction, request.formality, state.person))
    }
}
