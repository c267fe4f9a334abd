use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use td_i18n_core::{Lexicon, LexiconKey, MessageCatalog, MessageEntry, MessageKey};

use crate::error::{RuntimeError, RuntimeResult};

/// Serialized form of a single lexicon entry. The distinguished `""`
/// message key carries the catalog-wide `plural` header instead of
/// translation text.
#[derive(Debug, Clone, Deserialize)]
struct RawEntry {
    #[serde(default)]
    msgstr: Option<String>,
    #[serde(default)]
    msgstr_plural: Vec<String>,
    #[serde(default)]
    plural: Option<String>,
}

type RawLexicon = BTreeMap<String, BTreeMap<String, RawEntry>>;

pub fn load_lexicon(path: &Path) -> RuntimeResult<Lexicon> {
    let contents = fs::read_to_string(path)?;
    load_lexicon_str(&contents)
}

/// Builds a typed lexicon from its JSON form, compiling every catalog's
/// plural rule. A malformed rule fails the whole load and names the
/// offending lexicon key.
pub fn load_lexicon_str(contents: &str) -> RuntimeResult<Lexicon> {
    let raw: RawLexicon = serde_json::from_str(contents)?;
    let mut lexicon = Lexicon::new();
    for (raw_key, raw_catalog) in raw {
        let key = LexiconKey::from_joined(&raw_key)?;
        let mut catalog = MessageCatalog::new();
        for (raw_message_key, entry) in raw_catalog {
            if raw_message_key.is_empty() {
                if let Some(plural) = &entry.plural {
                    catalog.set_plural_forms(plural).map_err(|source| {
                        RuntimeError::MalformedPluralRule {
                            lexicon_key: raw_key.clone(),
                            source,
                        }
                    })?;
                }
                continue;
            }
            catalog.insert(
                MessageKey::from_joined(raw_message_key),
                MessageEntry {
                    msgstr: entry.msgstr,
                    msgstr_plural: entry.msgstr_plural,
                },
            );
        }
        lexicon.insert(key, catalog);
    }
    Ok(lexicon)
}
