use std::sync::Arc;

use td_i18n_core::{Lexicon, LexiconKey, MessageKey};

use crate::error::{RuntimeError, RuntimeResult};
use crate::logger::{LogKind, LogMeta, TranslationLogger, FALLBACK_EVENT};

/// Language tag whose catalog is the source text itself. Untranslated
/// messages there are expected, so fallbacks are never logged for it.
pub const IDENTITY_LANGUAGE: &str = "i-default";

#[derive(Debug, Clone)]
pub struct TranslatorOptions {
    pub language: String,
    pub domain: String,
    pub category: String,
}

impl TranslatorOptions {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            domain: String::new(),
            category: String::new(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Resolves message lookups against a shared lexicon.
///
/// A translator is configured once per `language:category:domain` tuple;
/// `translate` never mutates the lexicon, so any number of translators may
/// share one `Arc<Lexicon>`.
#[derive(Clone)]
pub struct Translator {
    lexicon: Arc<Lexicon>,
    options: TranslatorOptions,
    lexicon_key: LexiconKey,
    logger: Option<Arc<dyn TranslationLogger + Send + Sync>>,
}

impl Translator {
    pub fn new(lexicon: Arc<Lexicon>, options: TranslatorOptions) -> RuntimeResult<Self> {
        let lexicon_key =
            LexiconKey::new(&options.language, &options.category, &options.domain)?;
        Ok(Self {
            lexicon,
            options,
            lexicon_key,
            logger: None,
        })
    }

    pub fn with_logger(mut self, logger: Arc<dyn TranslationLogger + Send + Sync>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn language(&self) -> &str {
        &self.options.language
    }

    pub fn domain(&self) -> &str {
        &self.options.domain
    }

    pub fn category(&self) -> &str {
        &self.options.category
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn lexicon_key(&self) -> &LexiconKey {
        &self.lexicon_key
    }

    pub(crate) fn logger(&self) -> Option<&Arc<dyn TranslationLogger + Send + Sync>> {
        self.logger.as_ref()
    }

    /// Resolves one message request to display text.
    ///
    /// Missing catalogs and missing translations degrade to the source
    /// text; the only hard failure is a plural request against a catalog
    /// that defines no plural rule.
    pub fn translate(
        &self,
        msgctxt: Option<&str>,
        msgid: &str,
        msgid_plural: Option<&str>,
        count: u64,
        plural: bool,
    ) -> RuntimeResult<String> {
        let catalog = self.lexicon.get(&self.lexicon_key);
        let key = MessageKey::build(msgctxt, msgid, msgid_plural);

        if plural {
            let rule = catalog.and_then(|catalog| catalog.plural_rule()).ok_or_else(|| {
                RuntimeError::MissingPluralRule {
                    lexicon_key: self.lexicon_key.as_str().to_string(),
                }
            })?;
            let index = rule.select(count);
            if let Some(text) = catalog
                .and_then(|catalog| catalog.get(&key))
                .and_then(|entry| entry.msgstr_plural.get(index))
            {
                return Ok(text.clone());
            }
            let fallback = if index != 0 {
                msgid_plural.unwrap_or(msgid)
            } else {
                msgid
            };
            self.warn_fallback(catalog.is_some(), |prefix| {
                format!(
                    "{prefix} msgstr_plural not found for msgctxt={}, msgid={}, msgid_plural={}.",
                    quoted(msgctxt),
                    quoted(Some(msgid)),
                    quoted(msgid_plural),
                )
            });
            return Ok(fallback.to_string());
        }

        if let Some(text) = catalog
            .and_then(|catalog| catalog.get(&key))
            .and_then(|entry| entry.msgstr.as_deref())
        {
            return Ok(text.to_string());
        }
        self.warn_fallback(catalog.is_some(), |prefix| {
            format!(
                "{prefix} msgstr not found for msgctxt={}, msgid={}.",
                quoted(msgctxt),
                quoted(Some(msgid)),
            )
        });
        Ok(msgid.to_string())
    }

    fn warn_fallback(&self, catalog_found: bool, build: impl FnOnce(&str) -> String) {
        if self.options.language == IDENTITY_LANGUAGE {
            return;
        }
        let Some(logger) = &self.logger else {
            return;
        };
        let key = self.lexicon_key.as_str();
        let prefix = if catalog_found {
            format!("Using lexicon \"{key}\".")
        } else {
            format!("Lexicon \"{key}\" not found.")
        };
        let message = build(&prefix);
        logger.log(
            &message,
            &LogMeta {
                kind: LogKind::Warn,
                event: FALLBACK_EVENT,
                lexicon_key: key,
            },
        );
    }
}

fn quoted(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("\"{value}\""),
        None => String::from("none"),
    }
}
