use serde::{Deserialize, Serialize};

fn default_fallback() -> String {
    "I verb".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GlossConfig {
    /// Gloss shown when a construction has no entry
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for GlossConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
        }
    }
}
