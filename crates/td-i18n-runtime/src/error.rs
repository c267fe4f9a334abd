use td_i18n_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("invalid Plural-Forms in lexicon \"{lexicon_key}\": {source}")]
    MalformedPluralRule {
        lexicon_key: String,
        source: CoreError,
    },
    #[error("Plural-Forms not found in lexicon \"{lexicon_key}\"")]
    MissingPluralRule { lexicon_key: String },
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
