use crate::error::ConjugateError;
use crate::types::{ConjugationResult, Formality, Grid, GridCell};

/// Inflection interface for language implementations
pub trait Conjugator: Send + Sync {
    /// Grammatical feature selection the language understands
    type Features;

    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Derive one surface form for a verb, feature selection and formality
    fn conjugate(
        &self,
        request: &ConjugationRequest<Self::Features>,
    ) -> Result<ConjugationResult, ConjugateError>;

    /// Derive the same feature selection in every formality
    fn grid(&self, verb: &str, features: &Self::Features) -> Result<Grid, ConjugateError>
    where
        Self::Features: Clone,
    {
        let mut cells = Vec::with_capacity(Formality::ALL.len());
        let mut head: Option<ConjugationResult> = None;
        let mut fallbacks = Vec::new();

        for formality in Formality::ALL {
            let request = ConjugationRequest {
                verb: verb.to_string(),
                features: features.clone(),
                formality,
            };
            let result = self.conjugate(&request)?;
            for fallback in &result.fallbacks {
                if !fallbacks.contains(fallback) {
                    fallbacks.push(fallback.clone());
                }
            }
            cells.push(GridCell {
                formality,
                surface_form: result.surface_form.clone(),
                source: result.source,
            });
            head.get_or_insert(result);
        }

        let (construction, gloss) = head
            .map(|r| (r.construction, r.gloss))
            .unwrap_or_default();

        Ok(Grid {
            verb: verb.to_string(),
            construction,
            gloss,
            cells,
            fallbacks,
        })
    }
}

/// A single conjugation request; the engine keeps nothing between requests
#[derive(Debug, Clone)]
pub struct ConjugationRequest<F> {
    pub verb: String,
    pub features: F,
    pub formality: Formality,
}
