use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{CoreResult, LexiconKey, MessageKey, PluralRule};

/// A single translation entry: a singular translation, an ordered list of
/// plural translations, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageEntry {
    pub msgstr: Option<String>,
    pub msgstr_plural: Vec<String>,
}

impl MessageEntry {
    pub fn singular(msgstr: impl Into<String>) -> Self {
        Self {
            msgstr: Some(msgstr.into()),
            msgstr_plural: Vec::new(),
        }
    }

    pub fn plural(msgstr_plural: Vec<String>) -> Self {
        Self {
            msgstr: None,
            msgstr_plural,
        }
    }
}

/// Catalog-wide metadata: the Plural-Forms source text and its compiled
/// rule. This is the typed form of the distinguished empty-key entry in
/// the serialized lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogHeader {
    plural_forms: String,
    rule: PluralRule,
}

impl CatalogHeader {
    pub fn new(plural_forms: impl Into<String>) -> CoreResult<Self> {
        let plural_forms = plural_forms.into();
        let rule = PluralRule::parse(&plural_forms)?;
        Ok(Self { plural_forms, rule })
    }

    pub fn plural_forms(&self) -> &str {
        self.plural_forms.as_str()
    }

    pub fn rule(&self) -> &PluralRule {
        &self.rule
    }
}

#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    header: Option<CatalogHeader>,
    entries: BTreeMap<MessageKey, MessageEntry>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles and installs the catalog's plural rule. A malformed rule
    /// fails here, at load time, never during lookup.
    pub fn set_plural_forms(&mut self, source: &str) -> CoreResult<()> {
        self.header = Some(CatalogHeader::new(source)?);
        Ok(())
    }

    pub fn header(&self) -> Option<&CatalogHeader> {
        self.header.as_ref()
    }

    pub fn plural_rule(&self) -> Option<&PluralRule> {
        self.header.as_ref().map(CatalogHeader::rule)
    }

    pub fn insert(&mut self, key: MessageKey, entry: MessageEntry) {
        self.entries.insert(key, entry);
    }

    pub fn get(&self, key: &MessageKey) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The shared translation registry, keyed by `language:category:domain`.
/// Loaded once and treated as immutable afterwards, so any number of
/// translators can read it concurrently.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    catalogs: BTreeMap<LexiconKey, MessageCatalog>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: LexiconKey, catalog: MessageCatalog) {
        self.catalogs.insert(key, catalog);
    }

    pub fn get(&self, key: &LexiconKey) -> Option<&MessageCatalog> {
        self.catalogs.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &LexiconKey> {
        self.catalogs.keys()
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Lexicon, MessageCatalog, MessageEntry};
    use crate::{CoreError, LexiconKey, MessageKey};
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn catalog_resolves_inserted_entry() {
        let mut catalog = MessageCatalog::new();
        let key = MessageKey::build(None, "Hello", None);
        catalog.insert(key.clone(), MessageEntry::singular("Hallo"));
        let entry = catalog.get(&key).expect("entry");
        assert_eq!(entry.msgstr.as_deref(), Some("Hallo"));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn plural_rule_is_compiled_once_at_install() {
        let mut catalog = MessageCatalog::new();
        catalog.set_plural_forms("n != 1").expect("rule");
        let header = catalog.header().expect("header");
        assert_eq!(header.plural_forms(), "n != 1");
        let rule = catalog.plural_rule().expect("rule");
        assert_eq!(rule.select(2), 1);
    }

    #[test]
    fn malformed_plural_forms_is_rejected_at_install() {
        let mut catalog = MessageCatalog::new();
        let err = catalog.set_plural_forms("n !=").expect_err("malformed");
        assert!(matches!(err, CoreError::MalformedPluralRule(_)));
        assert!(catalog.header().is_none());
    }

    #[test]
    fn lexicon_resolves_by_composite_key() {
        let mut lexicon = Lexicon::new();
        let key = LexiconKey::new("de", "LC_MESSAGES", "shop").expect("key");
        let mut catalog = MessageCatalog::new();
        catalog.insert(
            MessageKey::build(None, "Cart", None),
            MessageEntry::singular("Warenkorb"),
        );
        lexicon.insert(key.clone(), catalog);

        assert_eq!(lexicon.len(), 1);
        let found = lexicon.get(&key).expect("catalog");
        assert_eq!(found.len(), 1);

        let missing = LexiconKey::new("fr", "LC_MESSAGES", "shop").expect("key");
        assert!(lexicon.get(&missing).is_none());
    }

    #[test]
    fn plural_entry_keeps_form_order() {
        let entry = MessageEntry::plural(vec!["one".to_string(), "many".to_string()]);
        assert_eq!(entry.msgstr_plural[0], "one");
        assert_eq!(entry.msgstr_plural[1], "many");
        assert!(entry.msgstr.is_none());
    }
}
