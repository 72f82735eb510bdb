use scribe_lang::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced by the analysis facade.
pub enum AnalysisError {
    #[error("unknown language '{0}'")]
    /// The language key matched neither a registered id nor a file extension.
    UnknownLanguage(String),

    #[error("language registry error: {0}")]
    /// Assembling a registry failed.
    Registry(#[from] RegistryError),

    #[error("YAML config error: {0}")]
    /// A YAML configuration document failed to parse.
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON config error: {0}")]
    /// A JSON configuration document failed to parse.
    Json(#[from] serde_json::Error),
}
