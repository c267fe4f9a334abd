use alloc::string::String;
use core::fmt;

use crate::{CoreError, CoreResult};

pub const LEXICON_KEY_SEPARATOR: &str = ":";
pub const PLURAL_SEPARATOR: &str = "{PLURAL_SEPARATOR}";
pub const MSG_KEY_SEPARATOR: &str = "{MSG_KEY_SEPARATOR}";

/// Composite lexicon key in `language:category:domain` form.
///
/// Both the loader side and the lookup side build keys through this type,
/// so the two can never disagree on the joined format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexiconKey(String);

impl LexiconKey {
    pub fn new(language: &str, category: &str, domain: &str) -> CoreResult<Self> {
        if language.is_empty() {
            return Err(CoreError::InvalidInput("language is empty"));
        }
        let mut value = String::with_capacity(language.len() + category.len() + domain.len() + 2);
        value.push_str(language);
        value.push_str(LEXICON_KEY_SEPARATOR);
        value.push_str(category);
        value.push_str(LEXICON_KEY_SEPARATOR);
        value.push_str(domain);
        Ok(Self(value))
    }

    /// Accepts an already-joined `language:category:domain` string.
    pub fn from_joined(value: &str) -> CoreResult<Self> {
        let mut parts = value.split(LEXICON_KEY_SEPARATOR);
        let language = parts
            .next()
            .ok_or(CoreError::InvalidInput("lexicon key is empty"))?;
        let category = parts
            .next()
            .ok_or(CoreError::InvalidInput("lexicon key is missing category"))?;
        let domain = parts
            .next()
            .ok_or(CoreError::InvalidInput("lexicon key is missing domain"))?;
        if parts.next().is_some() {
            return Err(CoreError::InvalidInput("lexicon key has too many segments"));
        }
        Self::new(language, category, domain)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LexiconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite message key derived from `(msgctxt, msgid, msgid_plural)`.
///
/// A segment participates in the key only when it is a non-empty string;
/// the reserved separators must not occur inside segment values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey(String);

impl MessageKey {
    pub fn build(msgctxt: Option<&str>, msgid: &str, msgid_plural: Option<&str>) -> Self {
        let msgctxt = non_empty(msgctxt);
        let msgid_plural = non_empty(msgid_plural);

        let mut value = String::with_capacity(
            msgctxt.map_or(0, |c| c.len() + MSG_KEY_SEPARATOR.len())
                + msgid.len()
                + msgid_plural.map_or(0, |p| p.len() + PLURAL_SEPARATOR.len()),
        );
        if let Some(msgctxt) = msgctxt {
            value.push_str(msgctxt);
            value.push_str(MSG_KEY_SEPARATOR);
        }
        value.push_str(msgid);
        if let Some(msgid_plural) = msgid_plural {
            value.push_str(PLURAL_SEPARATOR);
            value.push_str(msgid_plural);
        }
        Self(value)
    }

    /// Accepts a key already joined by a lexicon producer.
    pub fn from_joined(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
