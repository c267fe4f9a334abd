use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RuntimeResult;
use crate::translator::{TranslatorOptions, IDENTITY_LANGUAGE};

#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    pub default_language: String,
    #[serde(default)]
    pub default_domain: String,
    #[serde(default)]
    pub default_category: String,
    #[serde(default)]
    pub lexicon_path: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: IDENTITY_LANGUAGE.to_string(),
            default_domain: String::new(),
            default_category: String::new(),
            lexicon_path: None,
        }
    }
}

impl From<&I18nConfig> for TranslatorOptions {
    fn from(config: &I18nConfig) -> Self {
        TranslatorOptions::new(config.default_language.clone())
            .with_domain(config.default_domain.clone())
            .with_category(config.default_category.clone())
    }
}

pub fn load_config(path: &Path) -> RuntimeResult<I18nConfig> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<I18nConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(I18nConfig::default())
    }
}
