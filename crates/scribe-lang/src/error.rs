use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while assembling a [`LanguageRegistry`](crate::LanguageRegistry).
pub enum RegistryError {
    #[error("YAML parse error: {0}")]
    /// A YAML language definition failed to parse.
    Yaml(#[from] serde_yaml::Error),

    #[error("missing required field: {0}")]
    /// A required field was missing or empty.
    MissingField(&'static str),

    #[error("language '{0}' is already registered")]
    /// Two modes were registered under the same id.
    DuplicateLanguage(String),
}
