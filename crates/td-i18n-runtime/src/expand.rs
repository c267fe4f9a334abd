use std::sync::Arc;

use crate::error::RuntimeResult;
use crate::translator::{Translator, TranslatorOptions};

/// Single-pass `{name}` placeholder expansion. Tokens without a matching
/// argument are left as-is; nested substitution does not occur.
pub fn expand_named(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            result.push(ch);
            continue;
        }
        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }
        if closed {
            if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
                result.push_str(value);
            } else {
                result.push('{');
                result.push_str(&token);
                result.push('}');
            }
        } else {
            result.push('{');
            result.push_str(&token);
        }
    }

    result
}

/// Gettext-flavored convenience layer over [`Translator::translate`].
///
/// This is explicit composition: the wrapper owns a translator and calls
/// its single `translate` operation; the translator knows nothing about
/// the wrapper. Rescoping helpers return a new wrapper sharing the same
/// lexicon and logger.
#[derive(Clone)]
pub struct Gettext {
    translator: Translator,
}

impl Gettext {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn with_domain(&self, domain: impl Into<String>) -> RuntimeResult<Self> {
        self.rescope(|options| options.with_domain(domain))
    }

    pub fn with_category(&self, category: impl Into<String>) -> RuntimeResult<Self> {
        self.rescope(|options| options.with_category(category))
    }

    pub fn gettext(&self, msgid: &str) -> String {
        self.singular(None, msgid)
    }

    pub fn gettext_x(&self, msgid: &str, args: &[(&str, &str)]) -> String {
        expand_named(&self.gettext(msgid), args)
    }

    pub fn pgettext(&self, msgctxt: &str, msgid: &str) -> String {
        self.singular(Some(msgctxt), msgid)
    }

    pub fn pgettext_x(&self, msgctxt: &str, msgid: &str, args: &[(&str, &str)]) -> String {
        expand_named(&self.pgettext(msgctxt, msgid), args)
    }

    pub fn ngettext(
        &self,
        msgid: &str,
        msgid_plural: &str,
        count: u64,
    ) -> RuntimeResult<String> {
        self.translator
            .translate(None, msgid, Some(msgid_plural), count, true)
    }

    pub fn ngettext_x(
        &self,
        msgid: &str,
        msgid_plural: &str,
        count: u64,
        args: &[(&str, &str)],
    ) -> RuntimeResult<String> {
        let text = self.ngettext(msgid, msgid_plural, count)?;
        Ok(expand_with_count(&text, count, args))
    }

    pub fn npgettext(
        &self,
        msgctxt: &str,
        msgid: &str,
        msgid_plural: &str,
        count: u64,
    ) -> RuntimeResult<String> {
        self.translator
            .translate(Some(msgctxt), msgid, Some(msgid_plural), count, true)
    }

    pub fn npgettext_x(
        &self,
        msgctxt: &str,
        msgid: &str,
        msgid_plural: &str,
        count: u64,
        args: &[(&str, &str)],
    ) -> RuntimeResult<String> {
        let text = self.npgettext(msgctxt, msgid, msgid_plural, count)?;
        Ok(expand_with_count(&text, count, args))
    }

    fn singular(&self, msgctxt: Option<&str>, msgid: &str) -> String {
        match self.translator.translate(msgctxt, msgid, None, 1, false) {
            Ok(text) => text,
            Err(_) => msgid.to_string(),
        }
    }

    fn rescope(
        &self,
        update: impl FnOnce(TranslatorOptions) -> TranslatorOptions,
    ) -> RuntimeResult<Self> {
        let options = TranslatorOptions::new(self.translator.language())
            .with_domain(self.translator.domain())
            .with_category(self.translator.category());
        let options = update(options);
        let mut translator = Translator::new(Arc::clone(self.translator.lexicon()), options)?;
        if let Some(logger) = self.translator.logger() {
            translator = translator.with_logger(Arc::clone(logger));
        }
        Ok(Self { translator })
    }
}

/// Explicit args win over the implicit `{count}` binding.
fn expand_with_count(template: &str, count: u64, args: &[(&str, &str)]) -> String {
    let count_text = count.to_string();
    let mut all_args: Vec<(&str, &str)> = Vec::with_capacity(args.len() + 1);
    all_args.extend_from_slice(args);
    all_args.push(("count", &count_text));
    expand_named(template, &all_args)
}
