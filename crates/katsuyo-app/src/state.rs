use std::path::Path;

use anyhow::Context;
use katsuyo_config::Config;
use katsuyo_config::provider::ProviderKind;
use katsuyo_core::types::Formality;
use katsuyo_lang_japanese::{JapaneseConjugator, JsonProvider, RuleProvider};

pub struct AppState {
    pub config: Config,
    pub conjugator: JapaneseConjugator,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut conjugator =
            JapaneseConjugator::new().with_gloss_fallback(config.gloss.fallback.clone());

        match config.provider.kind {
            ProviderKind::None => {}
            ProviderKind::Rules => {
                conjugator = conjugator.with_provider(Box::new(RuleProvider::new()));
            }
            ProviderKind::Json => {
                let path = config
                    .provider
                    .path
                    .as_deref()
                    .context("provider kind is json but no provider path is set")?;
                let provider = JsonProvider::load(Path::new(path))
                    .with_context(|| format!("failed to load provider file {path}"))?;
                conjugator = conjugator.with_provider(Box::new(provider));
            }
        }

        tracing::debug!(
            "Conjugator ready (provider: {:?}, formality: {})",
            config.provider.kind,
            config.formality
        );

        Ok(Self { config, conjugator })
    }

    pub fn formality(&self, requested: Option<Formality>) -> Formality {
        requested.unwrap_or(self.config.formality)
    }
}
