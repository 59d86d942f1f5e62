use serde::{Deserialize, Serialize};

/// Where pre-computed verb forms come from
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Derive everything locally
    #[default]
    None,
    /// Forms computed by the built-in rule provider
    Rules,
    /// Forms loaded from `path`
    Json,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// JSON file for the `json` provider
    #[serde(default)]
    pub path: Option<String>,
}
