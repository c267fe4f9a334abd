#![forbid(unsafe_code)]

mod config;
mod error;
mod expand;
mod loader;
mod logger;
mod translator;

pub use crate::config::{load_config, load_config_or_default, I18nConfig};
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::expand::{expand_named, Gettext};
pub use crate::loader::{load_lexicon, load_lexicon_str};
pub use crate::logger::{LogKind, LogMeta, TranslationLogger, FALLBACK_EVENT};
pub use crate::translator::{Translator, TranslatorOptions, IDENTITY_LANGUAGE};
