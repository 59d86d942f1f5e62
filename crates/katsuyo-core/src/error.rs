/// Hard failures of the conjugation contract.
///
/// Missing table data is never reported here; see [`crate::types::Fallback`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConjugateError {
    #[error("Verb cannot be empty")]
    EmptyVerb,

    #[error("Input must be in Japanese: {0}")]
    NotJapanese(String),

    #[error("Not a dictionary-form verb ending: {0}")]
    UnsupportedEnding(String),

    #[error("Unknown construction: {0}")]
    InvalidConstruction(String),
}
