#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod catalog;
mod error;
mod key;
mod lexer;
mod parser;
mod plural;

pub use catalog::{CatalogHeader, Lexicon, MessageCatalog, MessageEntry};
pub use error::{CoreError, CoreResult};
pub use key::{
    LexiconKey, MessageKey, LEXICON_KEY_SEPARATOR, MSG_KEY_SEPARATOR, PLURAL_SEPARATOR,
};
pub use plural::PluralRule;
