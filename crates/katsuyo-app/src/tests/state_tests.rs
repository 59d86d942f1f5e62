use katsuyo_config::Config;
use katsuyo_config::provider::ProviderKind;
use katsuyo_core::types::Formality;

use crate::state::AppState;

#[test]
fn test_default_state_has_no_provider() {
    let state = AppState::new(Config::default()).unwrap();
    assert!(!state.conjugator.has_provider());
    assert_eq!(state.formality(None), Formality::Casual);
    assert_eq!(state.formality(Some(Formality::Formal)), Formality::Formal);
}

#[test]
fn test_configured_formality_is_default() {
    let mut config = Config::default();
    config.formality = Formality::Polite;
    let state = AppState::new(config).unwrap();
    assert_eq!(state.formality(None), Formality::Polite);
}

#[test]
fn test_rules_provider() {
    let mut config = Config::default();
    config.provider.kind = ProviderKind::Rules;
    let state = AppState::new(config).unwrap();
    assert!(state.conjugator.has_provider());
}

#[test]
fn test_json_provider_requires_path() {
    let mut config = Config::default();
    config.provider.kind = ProviderKind::Json;
    assert!(AppState::new(config).is_err());
}

#[test]
fn test_json_provider_missing_file() {
    let mut config = Config::default();
    config.provider.kind = ProviderKind::Json;
    config.provider.path = Some("/nonexistent/forms.json".to_string());
    assert!(AppState::new(config).is_err());
}
