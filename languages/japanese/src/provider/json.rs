use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FormProvider, ProviderError, VerbForms};

/// The four negative/polite variants of one verb
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbVariants {
    pub plain: Option<VerbForms>,
    pub negative: Option<VerbForms>,
    pub polite: Option<VerbForms>,
    pub negative_polite: Option<VerbForms>,
}

impl VerbVariants {
    fn variant(&self, negative: bool, polite: bool) -> Option<&VerbForms> {
        match (negative, polite) {
            (false, false) => self.plain.as_ref(),
            (true, false) => self.negative.as_ref(),
            (false, true) => self.polite.as_ref(),
            (true, true) => self.negative_polite.as_ref(),
        }
    }
}

/// Forms loaded from a JSON file keyed by dictionary-form verb
#[derive(Debug, Default)]
pub struct JsonProvider {
    verbs: HashMap<String, VerbVariants>,
}

impl JsonProvider {
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let verbs: HashMap<String, VerbVariants> = serde_json::from_str(json)?;
        Ok(Self { verbs })
    }

    pub fn load(path: &Path) -> Result<Self, ProviderError> {
        tracing::info!("Loading verb forms from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let provider = Self::from_json(&json)?;
        tracing::info!("Loaded forms for {} verbs", provider.len());
        Ok(provider)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

impl FormProvider for JsonProvider {
    fn forms(&self, verb: &str, negative: bool, polite: bool) -> Option<VerbForms> {
        self.verbs.get(verb)?.variant(negative, polite).cloned()
    }
}
